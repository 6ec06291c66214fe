//! Integration tests for covid-charts crate.
//!
//! These tests run the whole pipeline on sample files written to a
//! temporary directory.

use covid_charts::{AppError, Args, CovidCharts};
use covid_common::test_utils::{create_temp_dir, csv_fixtures, init_test_logging, write_fixture};
use covid_config::{Config, ConfigLoader};

fn write_inputs(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.input.counties = Some(write_fixture(dir, "us-counties.csv", csv_fixtures::counties_csv()));
    config.input.states = Some(write_fixture(dir, "us-states.csv", csv_fixtures::states_csv()));
    config.input.country = Some(write_fixture(dir, "us.csv", csv_fixtures::country_csv()));
    config.output.root = dir.join("charts");
    config.charts.width = 640;
    config.charts.height = 320;
    config
}

#[test]
fn test_full_run() {
    init_test_logging();
    let dir = create_temp_dir();
    let config = write_inputs(dir.path());
    let root = config.output.root.clone();

    let summary = CovidCharts::new(config).run().unwrap();

    assert_eq!(summary.ingest.records, 18);
    assert_eq!(summary.ingest.malformed_dates, 1);
    assert_eq!(summary.regions, 3);
    assert_eq!(summary.charts, 6);
    assert!(root.join("usa.png").exists());
    assert!(root.join("New York").join("State of New York.png").exists());
    assert!(root.join("New York").join("Kings.png").exists());
}

#[test]
fn test_run_from_config_file_with_cli_regions() {
    init_test_logging();
    let dir = create_temp_dir();
    let base = write_inputs(dir.path());
    let yaml = serde_yaml::to_string(&base).unwrap();
    let config_path = write_fixture(dir.path(), "config.yaml", &yaml);

    let args = Args {
        config: Some(config_path.clone()),
        regions: vec!["New Jersey".to_string()],
        ..Args::default()
    };
    let mut config = ConfigLoader::load_from_file(&config_path).unwrap();
    args.apply_to(&mut config);
    config.validate().unwrap();
    let root = config.output.root.clone();

    let summary = CovidCharts::new(config).run().unwrap();

    assert_eq!(summary.charts, 2);
    assert!(root.join("New Jersey").join("Bergen.png").exists());
    assert!(!root.join("usa.png").exists());
}

#[test]
fn test_missing_input_fails_run() {
    let dir = create_temp_dir();
    let mut config = write_inputs(dir.path());
    config.input.states = Some(dir.path().join("absent.csv"));

    let result = CovidCharts::new(config).run();
    assert!(matches!(result, Err(AppError::Covid(_))));
}

#[test]
fn test_cli_output_repairs_invalid_file_root() {
    let dir = create_temp_dir();
    let mut base = write_inputs(dir.path());
    base.output.root = std::path::PathBuf::new();
    let yaml = serde_yaml::to_string(&base).unwrap();
    let config_path = write_fixture(dir.path(), "config.yaml", &yaml);

    let mut config = ConfigLoader::new(&config_path).load().unwrap();
    assert!(config.validate().is_err());

    let args = Args {
        output: Some(dir.path().join("out")),
        ..Args::default()
    };
    args.apply_to(&mut config);

    assert!(config.validate().is_ok());
    assert_eq!(config.output.root, dir.path().join("out"));
}
