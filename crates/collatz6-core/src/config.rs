use crate::error::{Collatz6Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_STEPS: usize = 2000;
pub const DEFAULT_MIN_RIM: usize = 10;
pub const DEFAULT_MIN_STEPS: usize = 30;

// ---------------------------------------------------------------------------
// OrbitConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Upper bound on map applications per orbit.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

// ---------------------------------------------------------------------------
// ScanConfig
// ---------------------------------------------------------------------------

/// Thresholds a scanned orbit must meet (both inclusive) to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_min_rim")]
    pub min_rim: usize,
    #[serde(default = "default_min_steps")]
    pub min_steps: usize,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_min_rim() -> usize {
    DEFAULT_MIN_RIM
}

fn default_min_steps() -> usize {
    DEFAULT_MIN_STEPS
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_rim: default_min_rim(),
            min_steps: default_min_steps(),
            max_steps: default_max_steps(),
        }
    }
}

impl ScanConfig {
    pub fn matches(&self, rim_count: usize, steps: usize) -> bool {
        rim_count >= self.min_rim && steps >= self.min_steps
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Read a YAML preset. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// A scan whose `min_steps` exceeds its step cap can never match.
    pub fn validate(&self) -> Result<()> {
        if self.scan.min_steps > self.scan.max_steps {
            return Err(Collatz6Error::Config(format!(
                "scan.min_steps ({}) exceeds scan.max_steps ({})",
                self.scan.min_steps, self.scan.max_steps
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
