//! Command line arguments.

use clap::Parser;
use covid_config::Config;
use std::path::PathBuf;

/// Render rolling 7-day COVID-19 charts from CSV data.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Region to render; repeat for several. Renders all regions when absent
    #[arg(short, long = "region")]
    pub regions: Vec<String>,

    /// Log level
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Applies the flags that override configuration values.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.root.clone_from(output);
        }
        if !self.regions.is_empty() {
            config.output.regions.clone_from(&self.regions);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}
