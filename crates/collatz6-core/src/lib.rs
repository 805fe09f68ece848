//! Collatz-6 dynamics.
//!
//! The Collatz-6 map sends a positive integer `n` to
//!
//! | `n mod 6` | image                      |
//! |-----------|----------------------------|
//! | 0         | `n / 6`                    |
//! | 2, 4      | `n / 2`                    |
//! | 3         | `n / 3`                    |
//! | 1         | `(7n - 1) / 6^v6(7n - 1)`  |
//! | 5         | `(7n + 1) / 6^v6(7n + 1)`  |
//!
//! where `v6` is the 6-adic valuation. Values congruent to 1 or 5 are the
//! "rim" residues; this crate generates orbits until they reach the fixed
//! point 1 (or a step cap) and summarizes them.

pub mod analyze;
pub mod config;
pub mod error;
pub mod orbit;
pub mod scan;
pub mod step;
pub mod valuation;
pub mod value;

pub use analyze::{analyze, analyze_promoting, OrbitStatistics};
pub use config::{Config, OrbitConfig, ScanConfig};
pub use error::{Collatz6Error, Result};
pub use orbit::{orbit, Orbit, Trajectory};
pub use scan::{scan, ScanEntry, ScanSummary, Scanner};
pub use step::step;
pub use valuation::v6;
pub use value::OrbitValue;
