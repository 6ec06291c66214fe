//! Chart rendering trait and the plotters-backed PNG renderer.

use crate::chart::ChartData;
use chrono::{Days, NaiveDate};
use covid_common::{format_date, CovidError, Result};
use covid_config::ChartsConfig;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

/// Writes a chart image to a file.
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer {
    /// Renders `chart` to `path`. The parent directory must exist.
    fn render(&self, chart: &ChartData, path: &Path) -> Result<()>;
}

/// Parse a `#rrggbb` color, falling back to black.
pub fn parse_color(color: &str) -> RGBColor {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Renders single-line date charts to PNG files with plotters.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    config: ChartsConfig,
}

impl PlottersRenderer {
    /// Creates a renderer using the given size, fonts and colors.
    pub const fn new(config: ChartsConfig) -> Self {
        Self { config }
    }

    /// The renderer's settings.
    pub const fn config(&self) -> &ChartsConfig {
        &self.config
    }

    /// X range covering the dates. A single day is widened to two.
    fn date_range(dates: &[NaiveDate]) -> Result<(NaiveDate, NaiveDate)> {
        let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
            return Err(CovidError::graph("Cannot render a chart without dates"));
        };

        if last > first {
            Ok((first, last))
        } else {
            let next = first.checked_add_days(Days::new(1)).unwrap_or(first);
            Ok((first, next))
        }
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, chart: &ChartData, path: &Path) -> Result<()> {
        let config = &self.config;
        let (start, end) = Self::date_range(&chart.dates)?;

        let background = parse_color(&config.background_color);
        let line = parse_color(&config.line_color);
        let grid = parse_color(&config.grid_color);
        let family = config.font_family.as_str();

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&background)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.metadata.title, (family, config.title_font_size))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(start..end, 0i64..chart.y_bound.max(1))?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .bold_line_style(grid.stroke_width(1))
            .max_light_lines(0)
            .x_labels(12)
            .y_labels(10)
            .x_label_formatter(&|date: &NaiveDate| format_date(date))
            .y_desc(chart.metric.axis_label())
            .label_style((family, config.label_font_size))
            .axis_desc_style((family, config.label_font_size))
            .draw()?;

        let style = line.stroke_width(2);
        ctx.draw_series(LineSeries::new(
            chart.dates.iter().copied().zip(chart.values.iter().copied()),
            style,
        ))?
        .label(chart.metric.series_label())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((family, config.label_font_size))
            .background_style(background.mix(0.8).filled())
            .border_style(grid.stroke_width(1))
            .draw()?;

        root.present()?;

        debug!(
            path = %path.display(),
            points = chart.values.len(),
            y_bound = chart.y_bound,
            "Rendered chart"
        );
        Ok(())
    }
}
