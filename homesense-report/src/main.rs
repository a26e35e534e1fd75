// Homesense Report - Command-line report over generated sensor data
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Homesense Report
//!
//! Generates a smart home dataset, runs it through the preparation pipeline
//! and prints one view as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Raw data summary and the first 100 rows
//! homesense-report explore
//!
//! # Cleaning counters for 60 days of hourly data
//! homesense-report prepare --days 60
//!
//! # Insights and chart series with settings from a file
//! homesense-report dashboard --config homesense.json --stride 5
//! ```

mod config;
mod views;

use clap::{Parser, Subcommand};
use config::{ReportConfig, ReportError};
use homesense::Processor;
use homesense_testdata::{Generator, DEFAULT_DAYS, DEFAULT_RECORDS_PER_DAY};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Homesense smart home data report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    view: View,

    /// Number of simulated days
    #[arg(long, default_value_t = DEFAULT_DAYS, global = true)]
    days: usize,

    /// Records per simulated day
    #[arg(long, default_value_t = DEFAULT_RECORDS_PER_DAY, global = true)]
    per_day: usize,

    /// Generation seed (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Temperature chart sampling stride (overrides the config file)
    #[arg(long, global = true)]
    stride: Option<usize>,

    /// JSON file with generator and processor settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    /// Summary of the raw data plus a sample of rows
    Explore,
    /// Cleaning counters plus a summary of the cleaned data
    Prepare,
    /// Insights and chart series over the cleaned data
    Dashboard,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Homesense Report v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, ReportError> {
    let config = resolve_config(args)?;

    let generator = Generator::new(config.generator)?;
    let processor = Processor::with_config(config.processor)?;

    let raw = generator.generate(args.days, args.per_day)?;
    info!(
        "Generated {} records ({} days x {} per day, seed {})",
        raw.len(),
        args.days,
        args.per_day,
        generator.config().seed
    );

    match args.view {
        View::Explore => to_json(&views::exploration(&processor, &raw)),
        View::Prepare => to_json(&views::preparation(&processor, &raw)),
        View::Dashboard => to_json(&views::dashboard(&processor, &raw)?),
    }
}

/// Config file first, then command-line overrides.
fn resolve_config(args: &Args) -> Result<ReportConfig, ReportError> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            ReportConfig::from_file(path)?
        }
        None => ReportConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.generator.seed = seed;
    }
    if let Some(stride) = args.stride {
        config.processor.temperature_stride = stride;
    }
    Ok(config)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(value)?)
}
