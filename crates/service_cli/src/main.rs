//! mcbs - Monte Carlo vs Black-Scholes European option pricing
//!
//! # Commands
//!
//! - `mcbs` / `mcbs compare` - Histogram of terminal prices plus the call/put comparison report
//! - `mcbs price --option-type <call|put>` - One option type, both methods, with confidence interval
//! - `mcbs simulate [--drift <mu>]` - Terminal price histogram and summary statistics
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires configuration, logging and
//! presentation around the pricer crates. Reports go to stdout; logs go to
//! stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod report;
mod visualisation;

pub use error::{CliError, Result};

use config::ScenarioConfig;

/// Monte Carlo vs Black-Scholes option pricer
#[derive(Parser)]
#[command(name = "mcbs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario configuration file (TOML); defaults to ./mcbs.toml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Generator seed for reproducible runs
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, global = true)]
    paths: Option<usize>,

    /// Sample terminal prices in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Skip the distribution chart
    #[arg(long, global = true)]
    no_plot: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot the terminal price distribution and compare both models (default)
    Compare,

    /// Price one option type with both models
    Price {
        /// Option type (call or put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,
    },

    /// Simulate terminal prices and summarise the distribution
    Simulate {
        /// Drift of the simulated dynamics (defaults to the risk-free rate)
        #[arg(short, long, allow_hyphen_values = true)]
        drift: Option<f64>,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "mcbs=debug,pricer_pricing=debug"
    } else {
        "mcbs=info,pricer_pricing=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ScenarioConfig::resolve(cli.config.as_deref(), cli.seed, cli.paths, cli.parallel)
        .context("failed to load scenario configuration")?;
    debug!(?config, "Resolved scenario");

    let plot = !cli.no_plot;
    let output = match cli.command.unwrap_or(Commands::Compare) {
        Commands::Compare => commands::compare::run(&config, plot),
        Commands::Price { option_type } => commands::price::run(&config, &option_type),
        Commands::Simulate { drift } => commands::simulate::run(&config, drift, plot),
    }
    .context("command failed")?;

    println!("{}", output);
    info!("Done");
    Ok(())
}
