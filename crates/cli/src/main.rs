// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow unwrap in test code
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! ferry - harbour simulation CLI

mod console;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use ferry_core::FerryConfig;
use ferry_engine::{OperatorHandle, Simulation};
use std::path::PathBuf;

use crate::error::FerryError;
use crate::output::{DaySummary, OutputFormat};

#[derive(Parser)]
#[command(
    name = "ferry",
    version,
    about = "Ferry harbour simulation",
    after_help = "Console: w = depart now, k = end of day, q = close the console"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Passengers arriving during the day
    #[arg(long)]
    passengers: Option<u32>,

    /// Voyages before the harbour closes
    #[arg(long)]
    trips: Option<u32>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = load_config(&cli)?;
    let sim = Simulation::new(config)?;

    let operator = sim.operator();
    start_console(operator.clone())?;
    ctrlc::set_handler(move || {
        tracing::info!("interrupted, closing the harbour");
        operator.end_of_day();
    })?;

    let report = sim.run().await?;
    output::print(&DaySummary::from(&report), cli.format);
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<FerryConfig, FerryError> {
    let mut config = match &cli.config {
        Some(path) => FerryConfig::load(path).map_err(FerryError::invalid_config)?,
        None => FerryConfig::default(),
    };
    if let Some(passengers) = cli.passengers {
        config.passengers = passengers;
    }
    if let Some(trips) = cli.trips {
        config.trips_per_day = trips;
    }
    config.validate().map_err(FerryError::invalid_config)?;
    Ok(config)
}

/// Stdin blocks, so the console gets its own thread
fn start_console(operator: OperatorHandle) -> Result<()> {
    std::thread::Builder::new()
        .name("console".into())
        .spawn(move || {
            let stop = console::run(std::io::stdin().lock(), |event| operator.send(event));
            tracing::debug!(?stop, "console closed");
        })?;
    Ok(())
}
