//! Rolling-window differencing of cumulative series.

use chrono::NaiveDate;
use covid_common::{CovidError, Metric, Result};
use covid_data::TimeSeries;

/// Width of the rolling window in entries.
pub const WINDOW_DAYS: usize = 7;

/// Differences each value against the one `window` entries earlier.
///
/// The first `window` entries are 0.
pub fn rolling_delta(values: &[i64], window: usize) -> Vec<i64> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i < window {
                0
            } else {
                value.saturating_sub(values[i - window])
            }
        })
        .collect()
}

/// Weekly new cases and deaths for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingSeries {
    dates: Vec<NaiveDate>,
    cases: Vec<i64>,
    deaths: Vec<i64>,
}

impl RollingSeries {
    /// Computes rolling values from cumulative ones.
    ///
    /// Fails if the three inputs differ in length.
    pub fn new(dates: &[NaiveDate], cases: &[i64], deaths: &[i64]) -> Result<Self> {
        if cases.len() != deaths.len() || dates.len() != cases.len() {
            return Err(CovidError::data(format!(
                "Series length mismatch: {} dates, {} cases, {} deaths",
                dates.len(),
                cases.len(),
                deaths.len()
            )));
        }

        Ok(Self {
            dates: dates.to_vec(),
            cases: rolling_delta(cases, WINDOW_DAYS),
            deaths: rolling_delta(deaths, WINDOW_DAYS),
        })
    }

    /// Computes rolling values for a registry series.
    pub fn from_series(series: &TimeSeries) -> Result<Self> {
        Self::new(series.dates(), series.cases(), series.deaths())
    }

    /// Dates of the rolling values.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Rolling values for one metric.
    pub fn values(&self, metric: Metric) -> &[i64] {
        match metric {
            Metric::Cases => &self.cases,
            Metric::Deaths => &self.deaths,
        }
    }

    /// The trailing `max_days` dates and values of one metric, or all of them.
    pub fn tail(&self, metric: Metric, max_days: Option<usize>) -> (&[NaiveDate], &[i64]) {
        let start = max_days.map_or(0, |days| self.dates.len().saturating_sub(days));
        (&self.dates[start..], &self.values(metric)[start..])
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_common::test_utils::{consecutive_dates, mock_date};
    use proptest::prelude::*;

    #[test]
    fn test_short_series_is_all_zero() {
        assert_eq!(rolling_delta(&[5, 9, 12], WINDOW_DAYS), vec![0, 0, 0]);
        assert!(rolling_delta(&[], WINDOW_DAYS).is_empty());
    }

    #[test]
    fn test_eighth_entry_is_first_delta() {
        let rolling = rolling_delta(&[0, 0, 0, 0, 0, 0, 0, 10], WINDOW_DAYS);
        assert_eq!(rolling, vec![0, 0, 0, 0, 0, 0, 0, 10]);
    }

    #[test]
    fn test_kings_county_rolling() {
        let dates = [mock_date(2020, 3, 1), mock_date(2020, 3, 8)];
        let rolling = RollingSeries::new(&dates, &[100, 170], &[5, 9]).unwrap();

        assert_eq!(rolling.values(Metric::Cases), &[0, 0]);
        assert_eq!(rolling.values(Metric::Deaths), &[0, 0]);
    }

    #[test]
    fn test_deaths_rolled_like_cases() {
        let dates = consecutive_dates(mock_date(2020, 3, 1), 9);
        let cases = [0, 1, 2, 3, 4, 5, 6, 20, 30];
        let deaths = [0, 0, 0, 0, 0, 0, 1, 3, 4];

        let rolling = RollingSeries::new(&dates, &cases, &deaths).unwrap();

        assert_eq!(&rolling.values(Metric::Cases)[7..], &[20, 29]);
        assert_eq!(&rolling.values(Metric::Deaths)[7..], &[3, 4]);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let dates = [mock_date(2020, 3, 1)];
        let err = RollingSeries::new(&dates, &[1], &[]).unwrap_err();
        assert!(matches!(err, CovidError::Data { .. }));
    }

    #[test]
    fn test_tail_trims_leading_entries() {
        let dates = consecutive_dates(mock_date(2020, 1, 1), 10);
        let cases: Vec<i64> = (0..10).map(|i| i * 10).collect();
        let rolling = RollingSeries::new(&dates, &cases, &cases).unwrap();

        let (tail_dates, tail_values) = rolling.tail(Metric::Cases, Some(3));
        assert_eq!(tail_dates, &dates[7..]);
        assert_eq!(tail_values, &[70, 70, 70]);

        let (all_dates, _) = rolling.tail(Metric::Cases, Some(50));
        assert_eq!(all_dates.len(), 10);
        assert_eq!(rolling.tail(Metric::Deaths, None).1.len(), 10);
    }

    proptest! {
        #[test]
        fn test_property_rolling_matches_definition(values in prop::collection::vec(-1_000_000i64..1_000_000, 0..50)) {
            let rolling = rolling_delta(&values, WINDOW_DAYS);
            prop_assert_eq!(rolling.len(), values.len());
            for (i, r) in rolling.iter().enumerate() {
                if i < WINDOW_DAYS {
                    prop_assert_eq!(*r, 0);
                } else {
                    prop_assert_eq!(*r, values[i] - values[i - WINDOW_DAYS]);
                }
            }
        }

        #[test]
        fn test_property_non_decreasing_input_gives_non_negative_output(
            values in covid_common::test_utils::property_testing::cumulative_series_strategy(60)
        ) {
            prop_assert!(rolling_delta(&values, WINDOW_DAYS).iter().all(|r| *r >= 0));
        }
    }
}
