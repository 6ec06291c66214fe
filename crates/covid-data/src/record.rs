//! Row parsing driven by per-granularity column layouts.

use chrono::NaiveDate;
use covid_common::{parse_count, parse_date, ColumnLayout, Granularity, KeySource, Result};
use csv::StringRecord;

/// One row's contribution to a time series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Day of the observation.
    pub date: NaiveDate,
    /// Region key (state name or `USA`).
    pub region: String,
    /// Sub-region key (county name, `ENTIRE STATE` or `USA`).
    pub sub_region: String,
    /// Cumulative cases, 0 when unparseable.
    pub cases: i64,
    /// Cumulative deaths, 0 when unparseable.
    pub deaths: i64,
}

/// Why a row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// First field is `date` in any case.
    Header,
    /// Fewer fields than the layout requires.
    TooFewFields {
        /// Fields present in the row.
        found: usize,
        /// Minimum the layout requires.
        required: usize,
    },
}

/// Result of parsing a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row yielded a record.
    Parsed(ParsedRecord),
    /// The row was ignored.
    Skipped(SkipReason),
}

impl RowOutcome {
    /// The parsed record, if any.
    pub fn into_record(self) -> Option<ParsedRecord> {
        match self {
            Self::Parsed(record) => Some(record),
            Self::Skipped(_) => None,
        }
    }
}

/// Parses rows of one input file.
#[derive(Debug, Clone, Copy)]
pub struct RecordParser {
    granularity: Granularity,
    layout: ColumnLayout,
}

impl RecordParser {
    /// Creates a parser for rows of the given granularity.
    pub const fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            layout: granularity.layout(),
        }
    }

    /// The granularity this parser reads.
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Parses a raw line by splitting it on commas.
    ///
    /// Trailing `\r` and `\n` are ignored.
    pub fn parse_line(&self, line: &str) -> Result<RowOutcome> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
        self.parse_fields(&fields)
    }

    /// Parses a record produced by a CSV reader.
    pub fn parse_record(&self, record: &StringRecord) -> Result<RowOutcome> {
        let fields: Vec<&str> = record.iter().collect();
        self.parse_fields(&fields)
    }

    /// Parses the fields of one row.
    ///
    /// Short rows and header rows are skipped. A malformed date is an error;
    /// malformed counts become 0.
    pub fn parse_fields(&self, fields: &[&str]) -> Result<RowOutcome> {
        let layout = &self.layout;

        if fields.len() < layout.min_fields {
            return Ok(RowOutcome::Skipped(SkipReason::TooFewFields {
                found: fields.len(),
                required: layout.min_fields,
            }));
        }

        if fields[layout.date].eq_ignore_ascii_case("date") {
            return Ok(RowOutcome::Skipped(SkipReason::Header));
        }

        let date = parse_date(fields[layout.date])?;

        Ok(RowOutcome::Parsed(ParsedRecord {
            date,
            region: Self::key(fields, layout.region),
            sub_region: Self::key(fields, layout.sub_region),
            cases: parse_count(fields[layout.cases]),
            deaths: parse_count(fields[layout.deaths]),
        }))
    }

    fn key(fields: &[&str], source: KeySource) -> String {
        match source {
            KeySource::Column(index) => fields[index].to_string(),
            KeySource::Fixed(value) => value.to_string(),
        }
    }
}
