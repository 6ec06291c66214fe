//! Common type definitions for regional time series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-region key used for rows of the state-level file.
pub const ENTIRE_STATE: &str = "ENTIRE STATE";

/// Region and sub-region key used for rows of the country-level file.
pub const USA: &str = "USA";

/// Where a row keeps one of the keys of its time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Read from the given column.
    Column(usize),
    /// A fixed sentinel independent of the row.
    Fixed(&'static str),
}

/// Column mapping for one granularity of input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Rows with fewer fields are skipped.
    pub min_fields: usize,
    /// Column holding the `YYYY-MM-DD` date.
    pub date: usize,
    /// Source of the region key.
    pub region: KeySource,
    /// Source of the sub-region key.
    pub sub_region: KeySource,
    /// Column holding cumulative cases.
    pub cases: usize,
    /// Column holding cumulative deaths.
    pub deaths: usize,
}

/// Geographic level of aggregation of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// `date,county,state,fips,cases,deaths`
    County,
    /// `date,state,fips,cases,deaths`
    State,
    /// `date,cases,deaths`
    Country,
}

impl Granularity {
    /// All granularities in ingestion order.
    pub const ALL: [Self; 3] = [Self::County, Self::State, Self::Country];

    /// The column layout of rows at this granularity.
    #[must_use]
    pub const fn layout(self) -> ColumnLayout {
        match self {
            Self::County => ColumnLayout {
                min_fields: 6,
                date: 0,
                region: KeySource::Column(2),
                sub_region: KeySource::Column(1),
                cases: 4,
                deaths: 5,
            },
            Self::State => ColumnLayout {
                min_fields: 5,
                date: 0,
                region: KeySource::Column(1),
                sub_region: KeySource::Fixed(ENTIRE_STATE),
                cases: 3,
                deaths: 4,
            },
            Self::Country => ColumnLayout {
                min_fields: 3,
                date: 0,
                region: KeySource::Fixed(USA),
                sub_region: KeySource::Fixed(USA),
                cases: 1,
                deaths: 2,
            },
        }
    }

    /// Short lowercase name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::County => "county",
            Self::State => "state",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which cumulative count a chart is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Confirmed cases.
    Cases,
    /// Deaths.
    Deaths,
}

impl Metric {
    /// Plural noun used in chart titles.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Cases => "cases",
            Self::Deaths => "deaths",
        }
    }

    /// Y axis description.
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Cases => "Cases per week",
            Self::Deaths => "Deaths per week",
        }
    }

    /// Legend label of the plotted series.
    #[must_use]
    pub const fn series_label(self) -> &'static str {
        match self {
            Self::Cases => "Infections",
            Self::Deaths => "Deaths",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
