//! Fuzzing run configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config file.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-open integer interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub start: i32,
    pub end: i32,
}

impl IntRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Draw uniformly from the interval. Callers validate non-emptiness first.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.start..self.end)
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    /// Generate-classify-track iterations after seeding.
    pub iterations: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
    /// Chance of mutating a pool case instead of drawing a fresh triple.
    pub mutation_probability: f64,
    /// Interval for each side of a freshly generated triple.
    pub random_range: IntRange,
    /// Offsets added by the delta mutation.
    pub delta_range: IntRange,
    /// Replacement values drawn by the reset mutation.
    pub reset_range: IntRange,
    /// Emit a progress event every this many iterations.
    pub progress_interval: u64,
    /// Independent sessions to run in parallel and merge.
    pub shards: usize,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: 42,
            mutation_probability: 0.5,
            random_range: IntRange::new(-10, 1000),
            delta_range: IntRange::new(-5, 6),
            reset_range: IntRange::new(0, 1000),
            progress_interval: 1000,
            shards: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} range {range} is empty")]
    EmptyRange { name: &'static str, range: IntRange },

    #[error("mutation probability {0} is outside [0, 1]")]
    Probability(f64),

    #[error("progress interval must be at least 1")]
    ZeroProgressInterval,

    #[error("shard count must be at least 1")]
    ZeroShards,

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FuzzConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FuzzConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject configs that would make sampling panic or the loop misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, range) in [
            ("random", self.random_range),
            ("delta", self.delta_range),
            ("reset", self.reset_range),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptyRange { name, range });
            }
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::Probability(self.mutation_probability));
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::ZeroProgressInterval);
        }
        if self.shards == 0 {
            return Err(ConfigError::ZeroShards);
        }
        Ok(())
    }
}
