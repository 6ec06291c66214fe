//! Configuration schema definitions using serde.

use covid_common::{Granularity, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for covid-charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input file locations.
    pub input: InputConfig,
    /// Output location and region selection.
    pub output: OutputConfig,
    /// Chart rendering settings.
    pub charts: ChartsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Locations of the three delimited input files.
///
/// A missing entry means that granularity is not ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// County-level file (`date,county,state,fips,cases,deaths`).
    pub counties: Option<PathBuf>,
    /// State-level file (`date,state,fips,cases,deaths`).
    pub states: Option<PathBuf>,
    /// Country-level file (`date,cases,deaths`).
    pub country: Option<PathBuf>,
}

impl InputConfig {
    /// The configured path for a granularity.
    pub fn path_for(&self, granularity: Granularity) -> Option<&Path> {
        match granularity {
            Granularity::County => self.counties.as_deref(),
            Granularity::State => self.states.as_deref(),
            Granularity::Country => self.country.as_deref(),
        }
    }

    /// Configured inputs in ingestion order: county, state, country.
    pub fn sources(&self) -> Vec<(Granularity, &Path)> {
        Granularity::ALL
            .into_iter()
            .filter_map(|granularity| self.path_for(granularity).map(|path| (granularity, path)))
            .collect()
    }
}

/// Where charts are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory; charts land in `root/{region}/` and `root/usa.png`.
    pub root: PathBuf,
    /// Regions to render. Empty renders every region.
    pub regions: Vec<String>,
}

/// Chart rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Only plot the trailing `max_days` entries of each series.
    pub max_days: Option<usize>,
    /// Also write a rolling deaths chart next to each cases chart.
    pub render_deaths: bool,
    /// Font family for all text.
    pub font_family: String,
    /// Title font size.
    pub title_font_size: u32,
    /// Axis label font size.
    pub label_font_size: u32,
    /// Background color (hex format).
    pub background_color: String,
    /// Line color (hex format).
    pub line_color: String,
    /// Horizontal grid line color (hex format).
    pub grid_color: String,
}
