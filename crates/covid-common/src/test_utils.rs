//! Test utilities and shared test helpers for covid-charts.
//!
//! This module provides logging setup, fixtures and property strategies that
//! can be used across all crates in the workspace for unit and integration testing.

use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test harness may already have installed a subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating a date.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Consecutive days starting at `start`.
pub fn consecutive_dates(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Sample input files in the shape of the public NYT datasets.
pub mod csv_fixtures {
    /// County-level file: two counties of New York, one of New Jersey.
    pub fn counties_csv() -> &'static str {
        concat!(
            "date,county,state,fips,cases,deaths\n",
            "2020-03-01,Kings,New York,36047,100,5\n",
            "2020-03-01,Bergen,New Jersey,34003,12,0\n",
            "2020-03-02,Kings,New York,36047,110,5\n",
            "2020-03-02,Queens,New York,36081,40,1\n",
            "2020-03-08,Kings,New York,36047,170,9\n",
        )
    }

    /// State-level file with one malformed date and one short row.
    pub fn states_csv() -> &'static str {
        concat!(
            "date,state,fips,cases,deaths\n",
            "2020-03-01,New York,36,140,6\n",
            "2020-03-02,New York,36,150,6\n",
            "2020-03-xx,New York,36,155,7\n",
            "2020-03-03,New York\n",
            "2020-03-01,New Jersey,34,12,0\n",
        )
    }

    /// Country-level file spanning ten days.
    pub fn country_csv() -> &'static str {
        concat!(
            "date,cases,deaths\n",
            "2020-03-01,0,0\n",
            "2020-03-02,0,0\n",
            "2020-03-03,0,0\n",
            "2020-03-04,0,0\n",
            "2020-03-05,0,0\n",
            "2020-03-06,0,0\n",
            "2020-03-07,0,0\n",
            "2020-03-08,10,1\n",
            "2020-03-09,25,2\n",
            "2020-03-10,,3\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for non-decreasing cumulative count series.
    pub fn cumulative_series_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(0i64..1_000, 0..max_len).prop_map(|increments| {
            increments
                .into_iter()
                .scan(0i64, |total, step| {
                    *total += step;
                    Some(*total)
                })
                .collect()
        })
    }

    /// Strategy for region names without commas or newlines.
    pub fn region_name_strategy() -> impl Strategy<Value = String> {
        r"[A-Z][a-z]{2,12}( [A-Z][a-z]{2,12})?".prop_map(|s| s.to_string())
    }
}
