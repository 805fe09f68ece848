use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::fmt::{Debug, Display};

/// Integer representation an orbit can be computed in.
///
/// `u64` is the fast path; its rim transform reports overflow instead of
/// wrapping. `BigUint` never overflows.
pub trait OrbitValue: Clone + Ord + Debug + Display {
    /// `self mod 6`, always in `0..6`.
    fn residue6(&self) -> u8;

    fn is_positive(&self) -> bool;

    /// True for the fixed point 1.
    fn is_fixed_point(&self) -> bool;

    /// Integer division by a small divisor. Exact whenever the step
    /// function calls it.
    fn div_small(&self, divisor: u32) -> Self;

    /// `7n + 1` when `plus`, otherwise `7n - 1`. `None` if the result does
    /// not fit the representation. Requires `self >= 1`.
    fn rim_affine(&self, plus: bool) -> Option<Self>;

    fn approx_f64(&self) -> f64;

    fn widen(&self) -> BigUint;

    /// `self / denom` as a float.
    fn ratio(&self, denom: &Self) -> f64 {
        self.approx_f64() / denom.approx_f64()
    }
}

impl OrbitValue for u64 {
    fn residue6(&self) -> u8 {
        (*self % 6) as u8
    }

    fn is_positive(&self) -> bool {
        *self > 0
    }

    fn is_fixed_point(&self) -> bool {
        *self == 1
    }

    fn div_small(&self, divisor: u32) -> Self {
        *self / u64::from(divisor)
    }

    fn rim_affine(&self, plus: bool) -> Option<Self> {
        let scaled = self.checked_mul(7)?;
        if plus {
            scaled.checked_add(1)
        } else {
            scaled.checked_sub(1)
        }
    }

    fn approx_f64(&self) -> f64 {
        *self as f64
    }

    fn widen(&self) -> BigUint {
        BigUint::from(*self)
    }
}

/// Past this many bits both operands of [`OrbitValue::ratio`] are shifted
/// down so the `f64` conversion stays finite.
const RATIO_BITS: u64 = 960;

impl OrbitValue for BigUint {
    fn residue6(&self) -> u8 {
        let r = self % 6u32;
        r.to_u32_digits().first().map_or(0, |&d| d as u8)
    }

    fn is_positive(&self) -> bool {
        !self.is_zero()
    }

    fn is_fixed_point(&self) -> bool {
        self.bits() == 1
    }

    fn div_small(&self, divisor: u32) -> Self {
        self / divisor
    }

    fn rim_affine(&self, plus: bool) -> Option<Self> {
        if self.is_zero() && !plus {
            return None;
        }
        let scaled = self * 7u32;
        Some(if plus { scaled + 1u32 } else { scaled - 1u32 })
    }

    fn approx_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::INFINITY)
    }

    fn widen(&self) -> BigUint {
        self.clone()
    }

    fn ratio(&self, denom: &Self) -> f64 {
        let shift = self.bits().max(denom.bits()).saturating_sub(RATIO_BITS);
        if shift == 0 {
            return self.approx_f64() / denom.approx_f64();
        }
        (self >> shift).approx_f64() / (denom >> shift).approx_f64()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
