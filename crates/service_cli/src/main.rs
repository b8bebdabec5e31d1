//! sweep-cli - parameter sweeps and Greek cross-checks for closed-form
//! option formulas.
//!
//! # Commands
//!
//! - `sweep-cli sweep --row S=10:50:1 --col K=20:40:2` - Run an inline sweep
//! - `sweep-cli sweep [--name NAME]` - Run the sweeps in the configuration
//! - `sweep-cli batch` - Compare formulas with textbook reference values
//! - `sweep-cli greeks` - Compare analytic and finite-difference Greeks
//! - `sweep-cli check` - Validate and summarise the configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate drives `pricer_risk` sweeps
//! over `pricer_models` formulas and owns all file I/O and formatting.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

/// Parameter sweep CLI
#[derive(Parser)]
#[command(name = "sweep-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "sweep.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an inline sweep or the sweeps in the configuration
    Sweep(commands::sweep::SweepArgs),

    /// Price the textbook batches and reference points
    Batch,

    /// Compare analytic and finite-difference Greeks
    Greeks,

    /// Check the configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .as_deref()
        .or(cli.verbose.then_some("debug"));
    let config = config::build_config(&cli.config, log_level, cli.format.as_deref())?;

    init_tracing(config.log_level.as_filter_str());
    info!("sweep-cli v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Sweep(args) => commands::sweep::run(args, &config),
        Commands::Batch => commands::batch::run(&config),
        Commands::Greeks => commands::greeks::run(&config),
        Commands::Check => commands::check::run(&cli.config, &config),
    }
}
