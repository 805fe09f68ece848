use crate::error::{Collatz6Error, Result};
use crate::step::{is_rim, step};
use crate::value::OrbitValue;
use num_bigint::BigUint;
use std::fmt;

/// Summary of one orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitStatistics<T> {
    /// Map applications performed.
    pub steps: usize,
    /// Largest value visited, start included.
    pub max_val: T,
    /// `max_val / n0`; never below 1.0.
    pub growth: f64,
    /// Visited values congruent to 1 or 5 mod 6. The terminal 1 is not
    /// counted, and neither is a start value of 1.
    pub rim_count: usize,
    /// Whether the orbit reached 1 within the step cap.
    pub converged: bool,
}

impl<T: OrbitValue> OrbitStatistics<T> {
    pub fn widen(&self) -> OrbitStatistics<BigUint> {
        OrbitStatistics {
            steps: self.steps,
            max_val: self.max_val.widen(),
            growth: self.growth,
            rim_count: self.rim_count,
            converged: self.converged,
        }
    }
}

impl<T: fmt::Display> fmt::Display for OrbitStatistics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps={}, max={}, growth={:.2}, rim={}",
            self.steps, self.max_val, self.growth, self.rim_count
        )
    }
}

/// Walk the orbit of `n` and accumulate its statistics without storing it.
///
/// Truncation at `max_steps` still returns what was accumulated, with
/// `converged` set to false.
pub fn analyze<T: OrbitValue>(n: T, max_steps: usize) -> Result<OrbitStatistics<T>> {
    if !n.is_positive() {
        return Err(Collatz6Error::InvalidArgument(format!(
            "analyze needs a positive start, got {n}"
        )));
    }

    let mut x = n.clone();
    let mut max_val = n.clone();
    let mut steps = 0;
    let mut rim_count = 0;

    for _ in 0..max_steps {
        if x.is_fixed_point() {
            break;
        }
        if is_rim(&x) {
            rim_count += 1;
        }
        x = step(&x)?;
        steps += 1;
        if x > max_val {
            max_val = x.clone();
        }
    }

    let growth = max_val.ratio(&n);
    Ok(OrbitStatistics {
        steps,
        max_val,
        growth,
        rim_count,
        converged: x.is_fixed_point(),
    })
}

/// [`analyze`] in `u64`, redone in `BigUint` if the orbit overflows.
pub fn analyze_promoting(n: u64, max_steps: usize) -> Result<OrbitStatistics<BigUint>> {
    match analyze(n, max_steps) {
        Ok(stats) => Ok(stats.widen()),
        Err(Collatz6Error::Overflow { value }) => {
            tracing::debug!(n, overflowed_at = %value, "promoting orbit to BigUint");
            analyze(BigUint::from(n), max_steps)
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
