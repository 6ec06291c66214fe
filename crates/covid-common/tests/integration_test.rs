//! Integration tests for covid-common crate.

use covid_common::{init_logging, CovidError, LoggingConfig};

#[test]
fn test_logging_config_from_toml() {
    let config: LoggingConfig = toml::from_str(
        r#"
level = "covid_data=debug,info"
pretty_format = true
file_path = "logs/run.log"
"#,
    )
    .unwrap();

    assert_eq!(config.level, "covid_data=debug,info");
    assert!(config.pretty_format);
    assert_eq!(config.file_path.as_deref(), Some("logs/run.log"));
    assert!(!config.json_format);
}

#[test]
fn test_init_logging_twice_reports_error() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    };

    // The first install may race with other tests in this binary; the second
    // call in this test always finds a global subscriber already set.
    let _ = init_logging(&config);
    let second = init_logging(&config);
    assert!(matches!(second, Err(CovidError::Generic { .. })));
}
