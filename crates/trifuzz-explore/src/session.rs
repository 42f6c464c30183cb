//! The generate → classify → track loop.
//!
//! A `FuzzSession` owns every piece of mutable run state: the case source
//! (and through it the RNG), the coverage tracker and the interesting-case
//! store. Nothing is shared between sessions.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use trifuzz_ir::{execute, TestCase, Triple};

use crate::source::{CaseSource, Origin};
use crate::tracker::CoverageTracker;

/// Execution counters for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Seed triples classified before the loop.
    pub seeds_executed: u64,
    /// Loop iterations completed.
    pub iterations: u64,
    /// Candidates derived by mutation.
    pub mutated: u64,
    /// Candidates drawn fresh from the random range.
    pub random: u64,
    /// Candidates replayed from a script.
    pub scripted: u64,
}

impl SessionStats {
    /// Seeds plus loop iterations.
    pub fn total_executions(&self) -> u64 {
        self.seeds_executed + self.iterations
    }

    pub fn merge(&mut self, other: &SessionStats) {
        self.seeds_executed += other.seeds_executed;
        self.iterations += other.iterations;
        self.mutated += other.mutated;
        self.random += other.random;
        self.scripted += other.scripted;
    }
}

/// Everything a finished session produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// RNG seed the run was started from.
    pub seed: u64,
    pub tracker: CoverageTracker,
    /// Cases whose path was novel when they ran, in discovery order.
    pub interesting: Vec<TestCase>,
    pub stats: SessionStats,
}

pub struct FuzzSession<S: CaseSource> {
    source: S,
    tracker: CoverageTracker,
    interesting: Vec<TestCase>,
    stats: SessionStats,
    progress_interval: u64,
}

impl<S: CaseSource> FuzzSession<S> {
    pub fn new(source: S, progress_interval: u64) -> Self {
        Self {
            source,
            tracker: CoverageTracker::new(),
            interesting: Vec::new(),
            stats: SessionStats::default(),
            progress_interval: progress_interval.max(1),
        }
    }

    /// Classify and register each seed triple, in order.
    pub fn seed(&mut self, triples: &[Triple]) {
        for triple in triples {
            let case = execute(*triple);
            self.stats.seeds_executed += 1;
            if self.admit(case) {
                debug!(
                    triple = %case.triple,
                    signature = %case.signature,
                    "seed reached new path"
                );
            }
        }
    }

    /// Run one iteration. Returns the executed case and whether it was novel.
    pub fn step(&mut self) -> (TestCase, bool) {
        let candidate = self.source.next_candidate(&self.interesting);
        match candidate.origin {
            Origin::Random => self.stats.random += 1,
            Origin::Mutation { .. } => self.stats.mutated += 1,
            Origin::Scripted => self.stats.scripted += 1,
        }

        let case = execute(candidate.triple);
        let novel = self.admit(case);
        debug!(
            iteration = self.stats.iterations,
            triple = %case.triple,
            signature = %case.signature,
            origin = ?candidate.origin,
            "executed"
        );
        self.stats.iterations += 1;
        (case, novel)
    }

    /// Run exactly `iterations` steps. Full coverage does not stop the loop.
    pub fn run(&mut self, iterations: u64) {
        info!(iterations, source = self.source.name(), "fuzzing started");
        for i in 0..iterations {
            let (case, novel) = self.step();
            if novel {
                info!(iteration = i, "new interesting case: {case}");
            }
            if i % self.progress_interval == 0 {
                info!(
                    iteration = i,
                    unique_paths = self.tracker.distinct_paths(),
                    "progress"
                );
            }
        }
    }

    fn admit(&mut self, case: TestCase) -> bool {
        let novel = self.tracker.record_and_check(case.signature);
        if novel {
            self.interesting.push(case);
        }
        novel
    }

    pub fn tracker(&self) -> &CoverageTracker {
        &self.tracker
    }

    pub fn interesting(&self) -> &[TestCase] {
        &self.interesting
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn into_outcome(self, seed: u64) -> SessionOutcome {
        SessionOutcome {
            seed,
            tracker: self.tracker,
            interesting: self.interesting,
            stats: self.stats,
        }
    }
}
