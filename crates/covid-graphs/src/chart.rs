//! Chart titles, output paths and axis bounds.

use chrono::NaiveDate;
use covid_common::{Granularity, Metric};
use std::path::PathBuf;

/// Title and output location of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMetadata {
    /// Chart title.
    pub title: String,
    /// Path of the PNG relative to the output root.
    pub relative_path: PathBuf,
}

impl ChartMetadata {
    /// Derives title and path for a series.
    ///
    /// Deaths charts share the directory of the cases chart and carry a
    /// ` deaths` suffix in the file name.
    pub fn derive(region: &str, sub_region: &str, granularity: Granularity, metric: Metric) -> Self {
        let noun = metric.noun();
        let suffix = match metric {
            Metric::Cases => "",
            Metric::Deaths => " deaths",
        };

        let (subject, relative_path) = match granularity {
            Granularity::County => (
                format!("{sub_region} County {region}"),
                PathBuf::from(region).join(format!("{sub_region}{suffix}.png")),
            ),
            Granularity::State => (
                format!("{region} State"),
                PathBuf::from(region).join(format!("State of {region}{suffix}.png")),
            ),
            Granularity::Country => (
                "United States of America".to_string(),
                PathBuf::from(format!("usa{suffix}.png")),
            ),
        };

        Self {
            title: format!("Covid-19 new {noun} per week: {subject} (rolling 7 day summation)"),
            relative_path,
        }
    }
}

/// Upper bound of the y axis: 110% of the maximum, always above it.
///
/// An empty series has bound 1.
pub fn y_axis_bound(values: &[i64]) -> i64 {
    let Some(&max) = values.iter().max() else {
        return 1;
    };

    let bound = max.saturating_mul(11).div_euclid(10);
    if bound <= max {
        bound + 1
    } else {
        bound
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    /// Title and output location.
    pub metadata: ChartMetadata,
    /// Which rolling series is plotted.
    pub metric: Metric,
    /// X values.
    pub dates: Vec<NaiveDate>,
    /// Y values.
    pub values: Vec<i64>,
    /// Y axis upper bound.
    pub y_bound: i64,
}

impl ChartData {
    /// Builds chart data, computing the y bound from the plotted values.
    pub fn new(metadata: ChartMetadata, metric: Metric, dates: &[NaiveDate], values: &[i64]) -> Self {
        Self {
            metadata,
            metric,
            dates: dates.to_vec(),
            values: values.to_vec(),
            y_bound: y_axis_bound(values),
        }
    }
}
