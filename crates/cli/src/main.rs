#![deny(warnings)]

//! Headless runner: loads sample files, applies the levers and prints the
//! scenario report as JSON.

use anyhow::{Context, Result};
use catch_core::{Config, Levers};
use catch_ingestion::{load_records, DateRange};
use catch_simulation::ScenarioRunner;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Historical samples (JSON array).
    #[arg(long)]
    historical: Option<PathBuf>,

    /// Manually entered samples, overriding historical ones.
    #[arg(long)]
    manual: Option<PathBuf>,

    /// Configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recycling lever, 0-100.
    #[arg(short, long, default_value_t = 0)]
    recycling: u32,

    /// Processing lever, 0-100.
    #[arg(short, long, default_value_t = 0)]
    processing: u32,

    /// First day of the range (YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the range; defaults to `from`.
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let levers = Levers::new(args.recycling, args.processing).context("invalid lever values")?;

    let historical = match &args.historical {
        Some(path) => load_records(path)
            .with_context(|| format!("loading historical samples from {}", path.display()))?,
        None => Vec::new(),
    };
    let manual = match &args.manual {
        Some(path) => load_records(path)
            .with_context(|| format!("loading manual samples from {}", path.display()))?,
        None => Vec::new(),
    };

    let range = args
        .from
        .map(|from| DateRange::new(from, args.to.unwrap_or(from)));

    info!(
        historical = historical.len(),
        manual = manual.len(),
        ?range,
        "starting scenario"
    );

    let report = ScenarioRunner::new(config).run(&historical, &manual, range, levers);
    for (name, label) in report.delta_labels() {
        info!("{name}: {label}");
    }

    println!("{}", report.to_json(args.pretty)?);
    Ok(())
}
