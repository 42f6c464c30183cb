pub mod analytics;
pub mod report;

use tracing::info;
use trifuzz_explore::{run_sharded, ConfigError, FuzzConfig};

use analytics::RunTimer;
use report::FuzzReport;

/// Run the whole pipeline (seed, iterate, merge shards) and build the report.
///
/// Fails before any case runs when `config` does not validate.
pub fn fuzz(config: &FuzzConfig) -> Result<FuzzReport, ConfigError> {
    let timer = RunTimer::start();
    let outcome = run_sharded(config)?;
    let elapsed_ms = timer.elapsed_ms();
    info!(elapsed_ms, "fuzzing finished");
    Ok(FuzzReport::build(&outcome, config.shards, elapsed_ms))
}
