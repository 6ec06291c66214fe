//! Default values for every configuration section.

use crate::schema::*;
use covid_common::LoggingConfig;
use std::path::PathBuf;

/// Default chart width: 22 inches at 100 dpi.
pub const DEFAULT_WIDTH: u32 = 2200;

/// Default chart height: 6 inches at 100 dpi.
pub const DEFAULT_HEIGHT: u32 = 600;

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            charts: ChartsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            counties: Some(PathBuf::from("us-counties.csv")),
            states: Some(PathBuf::from("us-states.csv")),
            country: Some(PathBuf::from("us.csv")),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("charts"),
            regions: Vec::new(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_days: None,
            render_deaths: false,
            font_family: "sans-serif".to_string(),
            title_font_size: 22,
            label_font_size: 14,
            background_color: "#ffffff".to_string(),
            line_color: "#0000ff".to_string(),
            grid_color: "#b0b0b0".to_string(),
        }
    }
}
