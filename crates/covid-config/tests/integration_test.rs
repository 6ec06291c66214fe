//! Integration tests for covid-config crate.

use covid_common::test_utils::{create_temp_dir, write_fixture};
use covid_common::Granularity;
use covid_config::{Config, ConfigLoader};
use std::path::PathBuf;

#[test]
fn test_load_partial_yaml() {
    let dir = create_temp_dir();
    let path = write_fixture(
        dir.path(),
        "config.yaml",
        r##"
input:
  counties: data/us-counties.csv
  states: null
  country: data/us.csv
output:
  root: out
  regions: ["New York"]
charts:
  max_days: 90
  line_color: "#1f77b4"
"##,
    );

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(
        config.input.counties,
        Some(PathBuf::from("data/us-counties.csv"))
    );
    assert!(config.input.states.is_none());
    assert_eq!(config.output.regions, vec!["New York"]);
    assert_eq!(config.charts.max_days, Some(90));
    assert_eq!(config.charts.line_color, "#1f77b4");
    // Unspecified fields keep their defaults
    assert_eq!(config.charts.width, 2200);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());

    let sources = config.input.sources();
    assert_eq!(
        sources.iter().map(|(g, _)| *g).collect::<Vec<_>>(),
        vec![Granularity::County, Granularity::Country]
    );
}

#[test]
fn test_load_toml() {
    let dir = create_temp_dir();
    let path = write_fixture(
        dir.path(),
        "config.toml",
        r#"
[output]
root = "/tmp/charts"

[charts]
render_deaths = true
height = 800

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(config.output.root, PathBuf::from("/tmp/charts"));
    assert!(config.charts.render_deaths);
    assert_eq!(config.charts.height, 800);
    assert!(config.logging.json_format);
    assert_eq!(config.input, Config::default().input);
}

#[test]
fn test_invalid_yaml_is_reported() {
    let dir = create_temp_dir();
    let path = write_fixture(dir.path(), "broken.yaml", "charts: [unterminated\n");

    assert!(ConfigLoader::load_from_file(&path).is_err());
}

#[test]
fn test_loader_reports_its_path() {
    let loader = ConfigLoader::new("settings.yaml");
    assert_eq!(
        loader.path().map(|p| p.to_string_lossy().into_owned()),
        Some("settings.yaml".to_string())
    );
}

#[test]
fn test_load_leaves_validation_to_caller() {
    let dir = create_temp_dir();
    let path = write_fixture(dir.path(), "config.yaml", "charts:\n  width: 5\n");

    let config = ConfigLoader::new(&path).load().unwrap();

    assert_eq!(config.charts.width, 5);
    assert!(config.validate().is_err());
}
