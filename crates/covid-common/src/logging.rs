//! Structured logging infrastructure for covid-charts

use crate::{CovidError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "covid_data=trace")
    pub level: String,
    /// Whether to emit JSON lines
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Opens a non-rotating appender for the configured log file.
fn file_appender(file_path: &str) -> Result<RollingFileAppender> {
    let path = Path::new(file_path);
    let file_name = path
        .file_name()
        .ok_or_else(|| CovidError::config(format!("Log file path has no file name: {file_path}")))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;
    Ok(rolling::never(directory, file_name))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| CovidError::config_with_source("Invalid log filter", e))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        if let Some(file_path) = &config.file_path {
            registry.with(layer.with_writer(file_appender(file_path)?)).try_init()
        } else {
            registry.with(layer).try_init()
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        if let Some(file_path) = &config.file_path {
            registry
                .with(layer.with_ansi(false).with_writer(file_appender(file_path)?))
                .try_init()
        } else {
            registry.with(layer).try_init()
        }
    } else {
        let layer = fmt::layer()
            .compact()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        if let Some(file_path) = &config.file_path {
            registry
                .with(layer.with_ansi(false).with_writer(file_appender(file_path)?))
                .try_init()
        } else {
            registry.with(layer).try_init()
        }
    };

    result.map_err(|e| CovidError::with_source("Failed to install tracing subscriber", e))
}
