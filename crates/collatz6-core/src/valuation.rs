use crate::value::OrbitValue;

/// 6-adic valuation: the largest `k` with `6^k | n`.
///
/// `v6(0)` is defined as 0 rather than looping forever.
pub fn v6<T: OrbitValue>(n: &T) -> u32 {
    strip_six_power(n.clone()).1
}

/// Divide out every factor of 6, returning `(n / 6^k, k)`.
pub(crate) fn strip_six_power<T: OrbitValue>(mut n: T) -> (T, u32) {
    if !n.is_positive() {
        return (n, 0);
    }
    let mut k = 0;
    while n.residue6() == 0 {
        n = n.div_small(6);
        k += 1;
    }
    (n, k)
}
