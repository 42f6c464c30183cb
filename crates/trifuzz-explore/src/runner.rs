use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{info, info_span};

use crate::config::{ConfigError, FuzzConfig};
use crate::rng::shard_rng;
use crate::seeds::SEED_TRIPLES;
use crate::session::{FuzzSession, SessionOutcome, SessionStats};
use crate::source::MutationalSource;
use crate::tracker::CoverageTracker;

/// Run a single-threaded campaign: seed, then `config.iterations` steps.
///
/// The config is validated first, so an empty range or zero shard count is
/// an error rather than a panic inside the sampler.
pub fn run_campaign(config: &FuzzConfig) -> Result<SessionOutcome, ConfigError> {
    config.validate()?;
    Ok(run_shard(config, 0, config.iterations))
}

/// Run `config.shards` independent sessions in parallel and merge them.
///
/// Shard `i` uses the RNG stream `seed + i` and gets an even share of the
/// iteration budget (the first `iterations % shards` shards take one extra).
/// Every shard runs the seed list, so seed executions scale with the shard
/// count. With one shard this is exactly [`run_campaign`].
pub fn run_sharded(config: &FuzzConfig) -> Result<SessionOutcome, ConfigError> {
    config.validate()?;
    let shards = config.shards;
    if shards == 1 {
        return Ok(run_shard(config, 0, config.iterations));
    }

    let base = config.iterations / shards as u64;
    let extra = config.iterations % shards as u64;

    let outcomes: Vec<SessionOutcome> = (0..shards)
        .into_par_iter()
        .map(|shard| {
            let shard_id = shard as u64;
            let budget = base + u64::from(shard_id < extra);
            run_shard(config, shard_id, budget)
        })
        .collect();

    let merged = merge_outcomes(config.seed, outcomes);
    info!(
        shards,
        unique_paths = merged.tracker.distinct_paths(),
        "sharded run merged"
    );
    Ok(merged)
}

fn run_shard(config: &FuzzConfig, shard_id: u64, iterations: u64) -> SessionOutcome {
    let _span = info_span!("shard", id = shard_id).entered();

    let rng = shard_rng(config.seed, shard_id);
    let source = MutationalSource::new(rng, config);
    let mut session = FuzzSession::new(source, config.progress_interval);

    session.seed(&SEED_TRIPLES);
    session.run(iterations);
    session.into_outcome(config.seed)
}

/// Merge shard outcomes in shard order.
///
/// Counts add up. The interesting-case store keeps the first case per path
/// signature, scanning shards in order, so it still admits by path novelty.
pub fn merge_outcomes(seed: u64, outcomes: Vec<SessionOutcome>) -> SessionOutcome {
    let mut tracker = CoverageTracker::new();
    let mut stats = SessionStats::default();
    let mut interesting = Vec::new();
    let mut admitted = HashSet::new();

    for outcome in outcomes {
        tracker.merge(&outcome.tracker);
        stats.merge(&outcome.stats);
        for case in outcome.interesting {
            if admitted.insert(case.signature) {
                interesting.push(case);
            }
        }
    }

    SessionOutcome {
        seed,
        tracker,
        interesting,
        stats,
    }
}
