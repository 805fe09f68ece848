use crate::analyze::{analyze_promoting, OrbitStatistics};
use crate::config::ScanConfig;
use crate::error::Result;
use num_bigint::BigUint;
use std::fmt;
use std::ops::RangeInclusive;

// ---------------------------------------------------------------------------
// ScanEntry
// ---------------------------------------------------------------------------

/// A start value whose orbit met both scan thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEntry {
    pub n: u64,
    pub steps: usize,
    pub rim_count: usize,
    pub max_val: BigUint,
    pub growth: f64,
    pub converged: bool,
}

impl ScanEntry {
    fn new(n: u64, stats: OrbitStatistics<BigUint>) -> Self {
        Self {
            n,
            steps: stats.steps,
            rim_count: stats.rim_count,
            max_val: stats.max_val,
            growth: stats.growth,
            converged: stats.converged,
        }
    }
}

impl fmt::Display for ScanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, steps={}, rim={}, max={}, growth={:.2}",
            self.n, self.steps, self.rim_count, self.max_val, self.growth
        )
    }
}

// ---------------------------------------------------------------------------
// ScanSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: u64,
    pub matched: u64,
    /// Orbits that hit the step cap before reaching 1.
    pub truncated: u64,
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Filters an inclusive range of start values, in ascending order, down to
/// the ones whose orbits meet the thresholds in a [`ScanConfig`].
///
/// An empty range (`start > end`) yields nothing.
#[derive(Debug, Clone)]
pub struct Scanner {
    range: RangeInclusive<u64>,
    config: ScanConfig,
    summary: ScanSummary,
}

impl Scanner {
    pub fn new(start: u64, end: u64, config: ScanConfig) -> Self {
        Self {
            range: start..=end,
            config,
            summary: ScanSummary::default(),
        }
    }

    /// Counters for the start values consumed so far.
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }
}

impl Iterator for Scanner {
    type Item = Result<ScanEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        for n in self.range.by_ref() {
            let stats = match analyze_promoting(n, self.config.max_steps) {
                Ok(stats) => stats,
                Err(e) => return Some(Err(e)),
            };
            self.summary.scanned += 1;
            if !stats.converged {
                tracing::debug!(n, steps = stats.steps, "orbit truncated at step cap");
                self.summary.truncated += 1;
            }
            if self.config.matches(stats.rim_count, stats.steps) {
                self.summary.matched += 1;
                return Some(Ok(ScanEntry::new(n, stats)));
            }
        }
        None
    }
}

/// Scan `[start, end]` with the given thresholds.
pub fn scan(start: u64, end: u64, config: &ScanConfig) -> Scanner {
    Scanner::new(start, end, *config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
