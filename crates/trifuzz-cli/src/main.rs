// trifuzz: coverage-guided random testing of a triangle classifier.
//
// Seeds a corpus, mutates interesting cases, tracks which classifier
// paths were taken, and reports path and coverage statistics.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trifuzz_explore::FuzzConfig;

mod cli;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    info!(
        seed = config.seed,
        iterations = config.iterations,
        shards = config.shards,
        "starting run"
    );

    let report = trifuzz_core::fuzz(&config)?;
    match cli.output {
        OutputFormat::Human => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .init();
}

/// Filter from `RUST_LOG` directives, falling back to `info` (`debug` when
/// verbose) when none are given.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Layer CLI flags over the config file (or defaults) and validate.
fn resolve_config(cli: &Cli) -> Result<FuzzConfig> {
    let (mut config, seed_from_file) = match &cli.config {
        Some(path) => {
            let config = FuzzConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, true)
        }
        None => (FuzzConfig::default(), false),
    };

    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(shards) = cli.shards {
        config.shards = shards;
    }
    config.seed = match cli.seed {
        Some(seed) => seed,
        None if seed_from_file => config.seed,
        None => rand::random(),
    };

    config.validate().context("invalid fuzzing configuration")?;
    Ok(config)
}
