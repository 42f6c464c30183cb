use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// trifuzz - coverage-guided fuzzer for a triangle classifier
///
/// Seeds the corpus, runs a fixed number of generate/classify/track
/// iterations and prints path and coverage statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "trifuzz")]
#[command(author, version, about)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, env = "TRIFUZZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of loop iterations after seeding
    #[arg(long)]
    pub iterations: Option<u64>,

    /// RNG seed (random when neither this nor the config file sets one)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Independent sessions to run in parallel and merge
    #[arg(long)]
    pub shards: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    /// Log every iteration (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// Formatted JSON with indentation
    Json,
}
