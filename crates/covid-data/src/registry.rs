//! In-memory aggregation of parsed records by region and sub-region.

use crate::record::ParsedRecord;
use chrono::NaiveDate;
use covid_common::Granularity;
use indexmap::IndexMap;

/// Cumulative counts for one (region, sub-region) pair.
///
/// The three sequences always have the same length; entries stay in the
/// order they were appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeries {
    granularity: Granularity,
    dates: Vec<NaiveDate>,
    cases: Vec<i64>,
    deaths: Vec<i64>,
}

impl TimeSeries {
    /// Creates an empty series tagged with the granularity of its source.
    pub const fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            dates: Vec::new(),
            cases: Vec::new(),
            deaths: Vec::new(),
        }
    }

    /// Appends one observation.
    pub fn push(&mut self, date: NaiveDate, cases: i64, deaths: i64) {
        self.dates.push(date);
        self.cases.push(cases);
        self.deaths.push(deaths);
    }

    /// Granularity of the file that created this series.
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Observation dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Cumulative cases.
    pub fn cases(&self) -> &[i64] {
        &self.cases
    }

    /// Cumulative deaths.
    pub fn deaths(&self) -> &[i64] {
        &self.deaths
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Series of one region keyed by sub-region, in first-seen order.
pub type SubRegions = IndexMap<String, TimeSeries>;

/// All series keyed by region then sub-region.
///
/// Both levels iterate in the order keys were first recorded.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    regions: IndexMap<String, SubRegions>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its series, creating the series on first use.
    ///
    /// The granularity tag is only taken from the record that creates the series.
    pub fn record(&mut self, granularity: Granularity, record: ParsedRecord) {
        let ParsedRecord {
            date,
            region,
            sub_region,
            cases,
            deaths,
        } = record;

        self.regions
            .entry(region)
            .or_default()
            .entry(sub_region)
            .or_insert_with(|| TimeSeries::new(granularity))
            .push(date, cases, deaths);
    }

    /// Looks up a single series.
    pub fn get(&self, region: &str, sub_region: &str) -> Option<&TimeSeries> {
        self.regions.get(region)?.get(sub_region)
    }

    /// The sub-regions of one region.
    pub fn region(&self, region: &str) -> Option<&SubRegions> {
        self.regions.get(region)
    }

    /// Region names in first-seen order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Every series as `(region, sub_region, series)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &TimeSeries)> {
        self.regions.iter().flat_map(|(region, subs)| {
            subs.iter()
                .map(move |(sub, series)| (region.as_str(), sub.as_str(), series))
        })
    }

    /// Number of regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of series across all regions.
    pub fn series_count(&self) -> usize {
        self.regions.values().map(IndexMap::len).sum()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_common::{ENTIRE_STATE, USA};

    fn record(day: u32, region: &str, sub: &str, cases: i64, deaths: i64) -> ParsedRecord {
        ParsedRecord {
            date: NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
            region: region.to_string(),
            sub_region: sub.to_string(),
            cases,
            deaths,
        }
    }

    #[test]
    fn test_series_created_lazily_and_appended() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.record(Granularity::County, record(1, "New York", "Kings", 100, 5));
        registry.record(Granularity::County, record(8, "New York", "Kings", 170, 9));

        let series = registry.get("New York", "Kings").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.cases(), &[100, 170]);
        assert_eq!(series.deaths(), &[5, 9]);
        assert_eq!(series.granularity(), Granularity::County);
        assert_eq!(registry.series_count(), 1);
    }

    #[test]
    fn test_duplicate_records_are_kept() {
        let mut registry = Registry::new();
        registry.record(Granularity::Country, record(1, USA, USA, 1, 0));
        registry.record(Granularity::Country, record(1, USA, USA, 1, 0));

        assert_eq!(registry.get(USA, USA).unwrap().len(), 2);
    }

    #[test]
    fn test_granularity_fixed_at_creation() {
        let mut registry = Registry::new();
        registry.record(Granularity::State, record(1, "Ohio", ENTIRE_STATE, 1, 0));
        registry.record(Granularity::County, record(2, "Ohio", ENTIRE_STATE, 2, 0));

        let series = registry.get("Ohio", ENTIRE_STATE).unwrap();
        assert_eq!(series.granularity(), Granularity::State);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut registry = Registry::new();
        registry.record(Granularity::County, record(1, "Washington", "King", 1, 0));
        registry.record(Granularity::County, record(1, "Illinois", "Cook", 1, 0));
        registry.record(Granularity::County, record(1, "Washington", "Snohomish", 1, 0));
        registry.record(Granularity::State, record(1, "Washington", ENTIRE_STATE, 2, 0));
        registry.record(Granularity::County, record(2, "Illinois", "Cook", 2, 0));

        let names: Vec<_> = registry.region_names().collect();
        assert_eq!(names, vec!["Washington", "Illinois"]);

        let keys: Vec<_> = registry.iter().map(|(r, s, _)| (r, s)).collect();
        assert_eq!(
            keys,
            vec![
                ("Washington", "King"),
                ("Washington", "Snohomish"),
                ("Washington", ENTIRE_STATE),
                ("Illinois", "Cook"),
            ]
        );
        assert_eq!(registry.region_count(), 2);
        assert_eq!(registry.region("Illinois").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_keys() {
        let registry = Registry::new();
        assert!(registry.get("Nowhere", "Nothing").is_none());
        assert!(registry.region("Nowhere").is_none());
    }
}
