//! Graph manager for orchestrating chart generation over a registry.

use crate::chart::{ChartData, ChartMetadata};
use crate::renderer::ChartRenderer;
use crate::rolling::RollingSeries;
use covid_common::{CovidError, Metric, Result};
use covid_config::{ChartsConfig, OutputConfig};
use covid_data::{Registry, TimeSeries};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Renders one chart per series, in registry order, below an output root.
pub struct GraphManager<R> {
    renderer: R,
    output_root: PathBuf,
    max_days: Option<usize>,
    render_deaths: bool,
}

impl<R: ChartRenderer> GraphManager<R> {
    /// Creates a manager writing below `output_root`.
    pub fn new(renderer: R, output_root: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            output_root: output_root.into(),
            max_days: None,
            render_deaths: false,
        }
    }

    /// Creates a manager from the output and chart sections of the configuration.
    pub fn from_config(renderer: R, output: &OutputConfig, charts: &ChartsConfig) -> Self {
        Self::new(renderer, output.root.clone())
            .with_max_days(charts.max_days)
            .with_deaths(charts.render_deaths)
    }

    /// Only plot the trailing `max_days` entries of each series.
    #[must_use]
    pub fn with_max_days(mut self, max_days: Option<usize>) -> Self {
        self.max_days = max_days;
        self
    }

    /// Also render a deaths chart per series.
    #[must_use]
    pub fn with_deaths(mut self, render_deaths: bool) -> Self {
        self.render_deaths = render_deaths;
        self
    }

    /// Root directory charts are written below.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Renders every series. Returns the number of charts written.
    #[instrument(skip_all, fields(root = %self.output_root.display()))]
    pub fn render_all(&self, registry: &Registry) -> Result<usize> {
        let mut written = 0;
        for (region, sub_region, series) in registry.iter() {
            written += self.render_series(region, sub_region, series)?;
        }
        Ok(written)
    }

    /// Renders every series of the listed regions, in registry order.
    ///
    /// Regions absent from the registry are logged and skipped.
    #[instrument(skip_all, fields(root = %self.output_root.display(), regions = regions.len()))]
    pub fn render_regions(&self, registry: &Registry, regions: &[String]) -> Result<usize> {
        for missing in regions.iter().filter(|r| registry.region(r).is_none()) {
            warn!(region = %missing, "Region not found in input data");
        }

        let mut written = 0;
        for region in registry
            .region_names()
            .filter(|name| regions.iter().any(|r| r == name))
        {
            written += self.render_region(registry, region, None)?;
        }
        Ok(written)
    }

    /// Renders one region, optionally limited to some of its sub-regions.
    ///
    /// An unknown region is an error. Unknown sub-regions are skipped.
    pub fn render_region(
        &self,
        registry: &Registry,
        region: &str,
        sub_regions: Option<&[String]>,
    ) -> Result<usize> {
        let subs = registry
            .region(region)
            .ok_or_else(|| CovidError::data(format!("Unknown region: {region}")))?;

        let mut written = 0;
        for (sub_region, series) in subs {
            if sub_regions.is_some_and(|wanted| !wanted.iter().any(|s| s == sub_region)) {
                continue;
            }
            written += self.render_series(region, sub_region, series)?;
        }
        Ok(written)
    }

    fn metrics(&self) -> &'static [Metric] {
        if self.render_deaths {
            &[Metric::Cases, Metric::Deaths]
        } else {
            &[Metric::Cases]
        }
    }

    fn render_series(&self, region: &str, sub_region: &str, series: &TimeSeries) -> Result<usize> {
        if series.is_empty() {
            debug!(region, sub_region, "Skipping empty series");
            return Ok(0);
        }

        let rolling = RollingSeries::from_series(series)?;
        let mut written = 0;

        for &metric in self.metrics() {
            let metadata = ChartMetadata::derive(region, sub_region, series.granularity(), metric);
            let path = self.output_root.join(&metadata.relative_path);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|e| {
                    CovidError::with_source(format!("Failed to create {}", dir.display()), e)
                })?;
            }

            let (dates, values) = rolling.tail(metric, self.max_days);
            let chart = ChartData::new(metadata, metric, dates, values);
            self.renderer.render(&chart, &path)?;

            info!("saved: {}", path.display());
            written += 1;
        }

        Ok(written)
    }
}
