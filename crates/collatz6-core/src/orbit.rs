use crate::error::{Collatz6Error, Result};
use crate::step::step;
use crate::value::OrbitValue;
use std::fmt;

/// Lazy walk along an orbit.
///
/// Yields the start value first, then one image per step until the value 1
/// has been yielded or `max_steps` steps have been taken. An error from the
/// step function is yielded once, after the last good value, and ends the
/// walk.
#[derive(Debug)]
pub struct Trajectory<T> {
    pending: Option<Result<T>>,
    remaining: usize,
}

impl<T: OrbitValue> Trajectory<T> {
    pub fn new(start: T, max_steps: usize) -> Self {
        let pending = if start.is_positive() {
            Ok(start)
        } else {
            Err(Collatz6Error::InvalidArgument(format!(
                "orbit start must be a positive integer, got {start}"
            )))
        };
        Self {
            pending: Some(pending),
            remaining: max_steps,
        }
    }
}

impl<T: OrbitValue> Iterator for Trajectory<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.pending.take()?;
        if let Ok(current) = &item {
            if !current.is_fixed_point() && self.remaining > 0 {
                self.remaining -= 1;
                self.pending = Some(step(current));
            }
        }
        Some(item)
    }
}

/// A materialized orbit `[n0, n1, ..., nk]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orbit<T> {
    values: Vec<T>,
    converged: bool,
}

impl<T: OrbitValue> Orbit<T> {
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Number of map applications performed.
    pub fn steps(&self) -> usize {
        self.values.len() - 1
    }

    /// Whether the orbit reached 1 within the step cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn start(&self) -> &T {
        &self.values[0]
    }

    pub fn last(&self) -> &T {
        &self.values[self.values.len() - 1]
    }
}

impl<T: fmt::Display> fmt::Display for Orbit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Orbit of `n`, stopping at 1 or after `max_steps` steps.
///
/// The result holds between 1 and `max_steps + 1` values. Hitting the cap
/// is not an error; check [`Orbit::converged`].
pub fn orbit<T: OrbitValue>(n: T, max_steps: usize) -> Result<Orbit<T>> {
    let values = Trajectory::new(n, max_steps).collect::<Result<Vec<_>>>()?;
    let converged = values.last().is_some_and(|v| v.is_fixed_point());
    Ok(Orbit { values, converged })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
