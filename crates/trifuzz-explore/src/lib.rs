pub mod config;
pub mod mutate;
pub mod rng;
pub mod runner;
pub mod seeds;
pub mod session;
pub mod source;
pub mod tracker;

pub use config::{ConfigError, FuzzConfig, IntRange};
pub use runner::{run_campaign, run_sharded};
pub use session::{FuzzSession, SessionOutcome};
pub use tracker::CoverageTracker;
