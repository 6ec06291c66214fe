//! Main entry point for covid-charts.

use anyhow::{Context, Result};
use clap::Parser;
use covid_charts::{Args, CovidCharts};
use covid_common::init_logging;
use covid_config::ConfigLoader;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();

    let loader = match &args.config {
        Some(path) => ConfigLoader::new(path),
        None => ConfigLoader::discover(),
    };
    let mut config = loader.load().context("Failed to load configuration")?;
    args.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!("Starting covid-charts {}", env!("CARGO_PKG_VERSION"));
    match loader.path() {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("Using default configuration"),
    }

    let app = CovidCharts::new(config);
    if let Err(e) = app.run() {
        error!("Run failed: {e}");
        return Err(e.into());
    }

    Ok(())
}
