//! Application wiring: ingest the configured inputs, then render charts.

use crate::error::{AppError, AppResult};
use covid_config::Config;
use covid_data::{ingest_file, IngestStats, Registry};
use covid_graphs::{ChartRenderer, GraphManager, PlottersRenderer};
use std::fmt;
use tracing::{info, instrument};

/// Outcome of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Totals across every ingested file.
    pub ingest: IngestStats,
    /// Regions in the registry after ingestion.
    pub regions: usize,
    /// Charts written.
    pub charts: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {} regions; {} charts written",
            self.ingest, self.regions, self.charts
        )
    }
}

/// A configured run of the chart pipeline.
pub struct CovidCharts {
    config: Config,
}

impl CovidCharts {
    /// Creates the application from a validated configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Reads every configured input, county then state then country.
    #[instrument(skip(self))]
    pub fn ingest(&self) -> AppResult<(Registry, IngestStats)> {
        let sources = self.config.input.sources();
        if sources.is_empty() {
            return Err(AppError::NoInput);
        }

        let mut registry = Registry::new();
        let mut stats = IngestStats::default();
        for (granularity, path) in sources {
            stats += ingest_file(&mut registry, granularity, path)?;
        }

        Ok((registry, stats))
    }

    /// Renders the registry with the plotters renderer.
    pub fn render(&self, registry: &Registry) -> AppResult<usize> {
        let renderer = PlottersRenderer::new(self.config.charts.clone());
        self.render_with(renderer, registry)
    }

    /// Renders the registry with any renderer.
    ///
    /// Only the configured regions are rendered when the list is non-empty.
    pub fn render_with<R: ChartRenderer>(&self, renderer: R, registry: &Registry) -> AppResult<usize> {
        let manager = GraphManager::from_config(renderer, &self.config.output, &self.config.charts);
        let regions = &self.config.output.regions;

        let written = if regions.is_empty() {
            manager.render_all(registry)?
        } else {
            manager.render_regions(registry, regions)?
        };
        Ok(written)
    }

    /// Ingests all inputs, renders all charts and logs a summary.
    pub fn run(&self) -> AppResult<RunSummary> {
        let (registry, ingest) = self.ingest()?;
        info!(
            regions = registry.region_count(),
            series = registry.series_count(),
            "Ingestion complete"
        );

        let charts = self.render(&registry)?;
        let summary = RunSummary {
            ingest,
            regions: registry.region_count(),
            charts,
        };

        info!("Run complete: {summary}");
        Ok(summary)
    }
}
