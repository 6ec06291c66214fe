//! Configuration loading with file discovery and environment overrides.

use crate::schema::Config;
use covid_common::{CovidError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "COVID_CHARTS_CONFIG";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["config.yaml", "config.yml", "config.toml"];

/// Configuration loader for YAML or TOML files.
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader for an explicit file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates a loader that searches `COVID_CHARTS_CONFIG` and then the
    /// default file names, falling back to built-in defaults.
    pub fn discover() -> Self {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });
        Self { path }
    }

    /// The file this loader reads, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads and applies environment overrides.
    ///
    /// The result is not validated; callers validate once every override
    /// source has been applied.
    pub fn load(&self) -> Result<Config> {
        let mut config = match &self.path {
            Some(path) => Self::load_from_file(path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads a configuration file without overrides or validation.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as YAML.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CovidError::config_with_source(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| {
        CovidError::config_with_source(format!("Failed to parse environment variable '{key}'"), e)
    })
}

/// Applies environment overrides using `lookup` to read variables.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    // Input files
    if let Some(path) = lookup("COVID_COUNTIES_CSV") {
        config.input.counties = Some(PathBuf::from(path));
    }

    if let Some(path) = lookup("COVID_STATES_CSV") {
        config.input.states = Some(PathBuf::from(path));
    }

    if let Some(path) = lookup("COVID_COUNTRY_CSV") {
        config.input.country = Some(PathBuf::from(path));
    }

    // Output
    if let Some(root) = lookup("COVID_OUTPUT_DIR") {
        config.output.root = PathBuf::from(root);
    }

    if let Some(regions) = lookup("COVID_REGIONS") {
        config.output.regions = regions
            .split(';')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    // Charts
    if let Some(width) = lookup("CHART_WIDTH") {
        config.charts.width = parse_var("CHART_WIDTH", &width)?;
    }

    if let Some(height) = lookup("CHART_HEIGHT") {
        config.charts.height = parse_var("CHART_HEIGHT", &height)?;
    }

    if let Some(max_days) = lookup("CHART_MAX_DAYS") {
        config.charts.max_days = Some(parse_var("CHART_MAX_DAYS", &max_days)?);
    }

    if let Some(render_deaths) = lookup("CHART_RENDER_DEATHS") {
        config.charts.render_deaths = parse_var("CHART_RENDER_DEATHS", &render_deaths)?;
    }

    // Logging
    if let Some(level) = lookup("LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(file) = lookup("LOG_FILE") {
        config.logging.file_path = Some(file);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("COVID_COUNTIES_CSV", "/data/us-counties.csv"),
            ("COVID_OUTPUT_DIR", "/srv/charts"),
            ("COVID_REGIONS", "New York; New Jersey;"),
            ("CHART_WIDTH", "1100"),
            ("CHART_MAX_DAYS", "90"),
            ("CHART_RENDER_DEATHS", "true"),
            ("LOG_LEVEL", "debug"),
        ]);

        apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(
            config.input.counties,
            Some(PathBuf::from("/data/us-counties.csv"))
        );
        assert_eq!(config.output.root, PathBuf::from("/srv/charts"));
        assert_eq!(config.output.regions, vec!["New York", "New Jersey"]);
        assert_eq!(config.charts.width, 1100);
        assert_eq!(config.charts.max_days, Some(90));
        assert!(config.charts.render_deaths);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_no_overrides_leaves_defaults() {
        let mut config = Config::default();
        apply_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_override_names_variable() {
        let mut config = Config::default();
        let err = apply_overrides(&mut config, lookup_from(&[("CHART_HEIGHT", "tall")]))
            .unwrap_err();
        assert!(err.to_string().contains("CHART_HEIGHT"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ConfigLoader::load_from_file(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, CovidError::Config { .. }));
    }
}
