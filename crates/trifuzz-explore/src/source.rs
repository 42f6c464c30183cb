use std::collections::VecDeque;

use rand::Rng;
use trifuzz_ir::{TestCase, Triple};

use crate::config::{FuzzConfig, IntRange};
use crate::mutate::{mutate_triple, MutationBounds};

/// How a candidate triple was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Drawn fresh from the random range.
    Random,
    /// Derived from the interesting case at `parent` in the pool.
    Mutation { parent: usize },
    /// Replayed from a fixed script.
    Scripted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub triple: Triple,
    pub origin: Origin,
}

/// Abstract source of candidate triples for the driver loop.
///
/// Abstracted behind a trait so we can:
/// - Use ScriptedSource in tests (replays predefined triples)
/// - Swap in a different generation strategy without touching the session
pub trait CaseSource {
    /// Produce the next candidate, given the current interesting-case pool.
    fn next_candidate(&mut self, pool: &[TestCase]) -> Candidate;

    /// Name of this source (for tracing).
    fn name(&self) -> &str;
}

/// Random generation mixed with mutation of interesting cases.
///
/// While the pool is empty every candidate is random. Otherwise each
/// candidate is a mutation with probability `mutation_probability`.
pub struct MutationalSource<R: Rng> {
    rng: R,
    mutation_probability: f64,
    random_range: IntRange,
    bounds: MutationBounds,
}

impl<R: Rng> MutationalSource<R> {
    pub fn new(rng: R, config: &FuzzConfig) -> Self {
        Self {
            rng,
            mutation_probability: config.mutation_probability,
            random_range: config.random_range,
            bounds: MutationBounds::from_config(config),
        }
    }

    /// Draw each side independently from the random range.
    pub fn random_triple(&mut self) -> Triple {
        let a = self.random_range.sample(&mut self.rng);
        let b = self.random_range.sample(&mut self.rng);
        let c = self.random_range.sample(&mut self.rng);
        Triple::new(a, b, c)
    }

    /// Pick a pool case uniformly and mutate it. `pool` must be non-empty.
    fn mutate_from(&mut self, pool: &[TestCase]) -> Candidate {
        let parent = self.rng.gen_range(0..pool.len());
        let triple = mutate_triple(pool[parent].triple, &self.bounds, &mut self.rng);
        Candidate {
            triple,
            origin: Origin::Mutation { parent },
        }
    }
}

impl<R: Rng> CaseSource for MutationalSource<R> {
    fn next_candidate(&mut self, pool: &[TestCase]) -> Candidate {
        if !pool.is_empty() && self.rng.gen::<f64>() < self.mutation_probability {
            self.mutate_from(pool)
        } else {
            Candidate {
                triple: self.random_triple(),
                origin: Origin::Random,
            }
        }
    }

    fn name(&self) -> &str {
        "mutational"
    }
}

/// Replays predefined triples, then repeats a fallback forever.
pub struct ScriptedSource {
    queue: VecDeque<Triple>,
    fallback: Triple,
}

impl ScriptedSource {
    pub fn new(triples: impl IntoIterator<Item = Triple>) -> Self {
        Self {
            queue: triples.into_iter().collect(),
            fallback: Triple::new(1, 2, 5),
        }
    }

    /// Set the triple returned once the script runs out.
    pub fn with_fallback(mut self, fallback: Triple) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CaseSource for ScriptedSource {
    fn next_candidate(&mut self, _pool: &[TestCase]) -> Candidate {
        Candidate {
            triple: self.queue.pop_front().unwrap_or(self.fallback),
            origin: Origin::Scripted,
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
