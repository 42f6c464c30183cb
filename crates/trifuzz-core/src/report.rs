//! Run summary: path distribution, coverage and interesting cases.

use std::fmt;

use serde::{Deserialize, Serialize};
use trifuzz_explore::session::{SessionOutcome, SessionStats};
use trifuzz_ir::{PathSignature, TestCase};

use crate::analytics::CoverageBreakdown;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// How often one path was executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFrequency {
    pub signature: PathSignature,
    pub description: String,
    pub count: u64,
    /// Share of all recorded executions (seeds included), 0-100.
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzReport {
    pub seed: u64,
    pub shards: usize,
    pub elapsed_ms: f64,
    pub stats: SessionStats,
    pub distinct_paths: usize,
    pub path_distribution: Vec<PathFrequency>,
    pub interesting: Vec<TestCase>,
    pub coverage: CoverageBreakdown,
}

impl FuzzReport {
    pub fn build(outcome: &SessionOutcome, shards: usize, elapsed_ms: f64) -> Self {
        let total = outcome.tracker.total_executions();
        let path_distribution = outcome
            .tracker
            .frequencies()
            .map(|(signature, count)| PathFrequency {
                signature,
                description: signature.description().to_string(),
                count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            })
            .collect();

        Self {
            seed: outcome.seed,
            shards,
            elapsed_ms,
            stats: outcome.stats.clone(),
            distinct_paths: outcome.tracker.distinct_paths(),
            path_distribution,
            interesting: outcome.interesting.clone(),
            coverage: CoverageBreakdown::from_signatures(outcome.tracker.seen()),
        }
    }

    pub fn total_executions(&self) -> u64 {
        self.path_distribution.iter().map(|p| p.count).sum()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for FuzzReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Fuzzing Results ===")?;
        writeln!(f, "Execution time: {:.1} ms", self.elapsed_ms)?;
        writeln!(f, "RNG seed: {} ({} shard(s))", self.seed, self.shards)?;
        writeln!(
            f,
            "Iterations: {} ({} mutated, {} random) + {} seed executions",
            self.stats.iterations, self.stats.mutated, self.stats.random, self.stats.seeds_executed
        )?;
        writeln!(f, "Total unique paths: {}", self.distinct_paths)?;
        writeln!(f, "Total interesting test cases: {}", self.interesting.len())?;

        writeln!(f)?;
        writeln!(f, "Path distribution:")?;
        for p in &self.path_distribution {
            writeln!(
                f,
                "Path {} ({}): {} times ({:.1}%)",
                p.signature, p.description, p.count, p.percent
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Interesting test cases:")?;
        for case in &self.interesting {
            writeln!(f, "{case}")?;
        }

        writeln!(f)?;
        writeln!(f, "=== Coverage Analysis ===")?;
        for (name, ratio, unit) in [
            ("Statement", self.coverage.statements, "statements"),
            ("Branch", self.coverage.branches, "paths"),
            ("Condition", self.coverage.conditions, "conditions"),
        ] {
            writeln!(
                f,
                "{name} coverage: {}/{} {unit} ({:.0}%)",
                ratio.covered,
                ratio.total,
                ratio.percent()
            )?;
        }
        Ok(())
    }
}
