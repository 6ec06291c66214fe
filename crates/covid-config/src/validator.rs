//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use covid_common::{CovidError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Smallest accepted image side in pixels.
pub const MIN_DIMENSION: u32 = 100;

/// Largest accepted image side in pixels.
pub const MAX_DIMENSION: u32 = 8000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        if config.input.sources().is_empty() {
            return Err(CovidError::validation_field(
                "At least one input file must be configured",
                "input",
            ));
        }

        if config.output.root.as_os_str().is_empty() {
            return Err(CovidError::validation_field(
                "Output root cannot be empty",
                "output.root",
            ));
        }

        let charts = &config.charts;
        Self::check_dimension(charts.width, "charts.width")?;
        Self::check_dimension(charts.height, "charts.height")?;

        if charts.max_days == Some(0) {
            return Err(CovidError::validation_field(
                "max_days must be at least 1 when set",
                "charts.max_days",
            ));
        }

        if charts.title_font_size == 0 || charts.label_font_size == 0 {
            return Err(CovidError::validation_field(
                "Font sizes must be positive",
                "charts.title_font_size",
            ));
        }

        for (value, field) in [
            (&charts.background_color, "charts.background_color"),
            (&charts.line_color, "charts.line_color"),
            (&charts.grid_color, "charts.grid_color"),
        ] {
            if !HEX_COLOR_REGEX.is_match(value) {
                return Err(CovidError::validation_field(
                    format!("{value:?} is not a #RRGGBB color"),
                    field,
                ));
            }
        }

        Ok(())
    }

    fn check_dimension(value: u32, field: &str) -> Result<()> {
        if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
            Ok(())
        } else {
            Err(CovidError::validation_field(
                format!("Must be between {MIN_DIMENSION} and {MAX_DIMENSION} pixels, got {value}"),
                field,
            ))
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
