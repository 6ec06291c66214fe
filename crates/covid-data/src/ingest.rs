//! Reading input files into a [`Registry`].

use crate::record::{RecordParser, RowOutcome};
use crate::registry::Registry;
use covid_common::{CovidError, Granularity, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::ops::AddAssign;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Row counts collected while ingesting one or more files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Rows read, including headers and skipped rows.
    pub rows: usize,
    /// Rows appended to the registry.
    pub records: usize,
    /// Header and short rows.
    pub skipped: usize,
    /// Rows dropped because their date did not parse.
    pub malformed_dates: usize,
}

impl AddAssign for IngestStats {
    fn add_assign(&mut self, other: Self) {
        self.rows += other.rows;
        self.records += other.records;
        self.skipped += other.skipped;
        self.malformed_dates += other.malformed_dates;
    }
}

impl fmt::Display for IngestStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records from {} rows ({} skipped, {} malformed dates)",
            self.records, self.rows, self.skipped, self.malformed_dates
        )
    }
}

/// Folds rows of a single input into a registry.
struct Ingestor<'a> {
    registry: &'a mut Registry,
    parser: RecordParser,
    source: &'a str,
    stats: IngestStats,
}

impl<'a> Ingestor<'a> {
    fn new(registry: &'a mut Registry, granularity: Granularity, source: &'a str) -> Self {
        Self {
            registry,
            parser: RecordParser::new(granularity),
            source,
            stats: IngestStats::default(),
        }
    }

    fn accept(&mut self, line: u64, outcome: Result<RowOutcome>) -> Result<()> {
        self.stats.rows += 1;

        match outcome {
            Ok(RowOutcome::Parsed(record)) => {
                self.registry.record(self.parser.granularity(), record);
                self.stats.records += 1;
            }
            Ok(RowOutcome::Skipped(reason)) => {
                debug!(source = self.source, line, ?reason, "Skipping row");
                self.stats.skipped += 1;
            }
            Err(CovidError::MalformedDate { value }) => {
                warn!(
                    source = self.source,
                    line,
                    value = %value,
                    "Skipping row with malformed date"
                );
                self.stats.malformed_dates += 1;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn finish(self) -> IngestStats {
        info!(
            source = self.source,
            granularity = %self.parser.granularity(),
            "Ingested {}",
            self.stats
        );
        self.stats
    }
}

/// Ingests CSV data from any reader.
///
/// `source` names the input in log messages. Every line is one row split on
/// commas; quote characters are kept as field text and never span lines.
/// Rows may have any number of fields.
pub fn ingest_reader<R: Read>(
    registry: &mut Registry,
    granularity: Granularity,
    reader: R,
    source: &str,
) -> Result<IngestStats> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut ingestor = Ingestor::new(registry, granularity, source);
    let mut record = StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, csv::Position::line);
        let outcome = ingestor.parser.parse_record(&record);
        ingestor.accept(line, outcome)?;
    }

    Ok(ingestor.finish())
}

/// Ingests the CSV file at `path`.
///
/// A file that cannot be opened is an error.
#[instrument(skip(registry, path), fields(path = %path.display()))]
pub fn ingest_file(
    registry: &mut Registry,
    granularity: Granularity,
    path: &Path,
) -> Result<IngestStats> {
    let file = File::open(path).map_err(|e| {
        CovidError::with_source(format!("Failed to open {}", path.display()), e)
    })?;

    ingest_reader(registry, granularity, file, &path.display().to_string())
}

/// Ingests lines that were already read, splitting each on commas.
pub fn ingest_lines<'l, I>(
    registry: &mut Registry,
    granularity: Granularity,
    lines: I,
    source: &str,
) -> Result<IngestStats>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut ingestor = Ingestor::new(registry, granularity, source);

    for (index, line) in lines.into_iter().enumerate() {
        let outcome = ingestor.parser.parse_line(line);
        ingestor.accept(index as u64 + 1, outcome)?;
    }

    Ok(ingestor.finish())
}
