//! Shared parsing and formatting helpers.

use crate::{CovidError, Result};
use chrono::NaiveDate;

/// Parses a count field, falling back to `fallback` when it is not an integer.
///
/// Surrounding whitespace is ignored, so `" 42\r"` parses as 42.
#[must_use]
pub fn parse_count_or(value: &str, fallback: i64) -> i64 {
    value.trim().parse().unwrap_or(fallback)
}

/// Parses a count field, treating anything unparseable as zero.
#[must_use]
pub fn parse_count(value: &str) -> i64 {
    parse_count_or(value, 0)
}

/// Parses a `YYYY-MM-DD` date by splitting on `-`.
///
/// Exactly three integer parts forming a real calendar date are required.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let malformed = || CovidError::malformed_date(value);

    let mut parts = value.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let year: i32 = year.trim().parse().map_err(|_| malformed())?;
    let month: u32 = month.trim().parse().map_err(|_| malformed())?;
    let day: u32 = day.trim().parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Formats a date for axis labels.
#[must_use]
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
