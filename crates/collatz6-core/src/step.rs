use crate::error::{Collatz6Error, Result};
use crate::valuation::strip_six_power;
use crate::value::OrbitValue;

/// True when `n mod 6` is 1 or 5.
pub fn is_rim<T: OrbitValue>(n: &T) -> bool {
    matches!(n.residue6(), 1 | 5)
}

/// One application of the Collatz-6 map.
///
/// Residues 0, 2, 3 and 4 divide exactly. Residues 1 and 5 lift to
/// `7n - 1` / `7n + 1` and then strip every factor of 6, so the image of a
/// rim value is never divisible by 6.
///
/// Fails with `InvalidArgument` for 0 and with `Overflow` when the lift does
/// not fit the representation.
pub fn step<T: OrbitValue>(n: &T) -> Result<T> {
    if !n.is_positive() {
        return Err(Collatz6Error::InvalidArgument(format!(
            "step is defined for positive integers, got {n}"
        )));
    }
    match n.residue6() {
        0 => Ok(n.div_small(6)),
        2 | 4 => Ok(n.div_small(2)),
        3 => Ok(n.div_small(3)),
        r => {
            let lifted = n
                .rim_affine(r == 5)
                .ok_or_else(|| Collatz6Error::Overflow {
                    value: n.to_string(),
                })?;
            Ok(strip_six_power(lifted).0)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
