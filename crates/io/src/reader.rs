//! CSV reader configuration and ingestion.

use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use pluvia_maxima::RainfallSeries;
use tracing::{debug, info, trace, warn};

use crate::error::IngestError;
use crate::parse;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Column names and delimiter for rainfall CSV files.
///
/// Column names are matched case-insensitively against the trimmed header.
/// The [`Default`] names are `precipitacao`, `datahora`, `data` and `hora`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    depth_column: String,
    datetime_column: String,
    date_column: String,
    time_column: String,
    delimiter: Option<char>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            depth_column: "precipitacao".into(),
            datetime_column: "datahora".into(),
            date_column: "data".into(),
            time_column: "hora".into(),
            delimiter: None,
        }
    }
}

impl ReaderConfig {
    /// Set the depth (mm) column name.
    pub fn with_depth_column(mut self, name: impl Into<String>) -> Self {
        self.depth_column = name.into();
        self
    }

    /// Set the combined date-time column name.
    pub fn with_datetime_column(mut self, name: impl Into<String>) -> Self {
        self.datetime_column = name.into();
        self
    }

    /// Set the date column name used with the time column.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the `HHMM` time column name used with the date column.
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = name.into();
        self
    }

    /// Force a delimiter instead of detecting it from the header.
    pub fn with_delimiter(mut self, delimiter: Option<char>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Depth column name.
    pub fn depth_column(&self) -> &str {
        &self.depth_column
    }

    /// Forced delimiter, if any.
    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidConfig`] if a column name is blank or
    /// the delimiter is non-ASCII, alphanumeric, a dot or a double quote.
    pub fn validate(&self) -> Result<(), IngestError> {
        for (what, name) in [
            ("depth_column", &self.depth_column),
            ("datetime_column", &self.datetime_column),
            ("date_column", &self.date_column),
            ("time_column", &self.time_column),
        ] {
            if name.trim().is_empty() {
                return Err(IngestError::InvalidConfig {
                    reason: format!("{what} must not be empty"),
                });
            }
        }
        if let Some(d) = self.delimiter
            && (!d.is_ascii() || d.is_alphanumeric() || d == '.' || d == '"')
        {
            return Err(IngestError::InvalidConfig {
                reason: format!("unusable delimiter {d:?}"),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// IngestReport
// ---------------------------------------------------------------------------

/// Row accounting for one ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Delimiter used.
    pub delimiter: char,
    /// Non-empty data rows after the header.
    pub rows_read: usize,
    /// Rows whose timestamp could not be parsed.
    pub bad_timestamp: usize,
    /// Rows whose depth could not be parsed.
    pub bad_depth: usize,
    /// Rows with a negative depth.
    pub negative_depth: usize,
    /// Rows dropped because an earlier row had the same timestamp.
    pub duplicates: usize,
    /// Rows kept in the series.
    pub rows_kept: usize,
}

impl IngestReport {
    /// Total rows dropped for any reason.
    pub fn dropped(&self) -> usize {
        self.bad_timestamp + self.bad_depth + self.negative_depth + self.duplicates
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Read a rainfall CSV file into a series.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] or [`IngestError::Io`] on file
/// access problems, then any error of [`parse_rainfall_csv`].
pub fn read_rainfall_csv(
    path: &Path,
    config: &ReaderConfig,
) -> Result<(RainfallSeries, IngestReport), IngestError> {
    config.validate()?;

    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read rainfall csv");

    parse_rainfall_csv(&text, config)
}

/// Parse rainfall CSV text into a series.
///
/// Rows with an unparsable timestamp or depth, or a negative depth, are
/// dropped and counted. The rest are sorted by time; of several rows with
/// the same timestamp only the first (in file order) is kept.
///
/// # Errors
///
/// - [`IngestError::EmptyInput`] if there is no header line.
/// - [`IngestError::MissingColumn`] if the depth column is absent.
/// - [`IngestError::MissingTimestampColumns`] if neither timestamp layout
///   is present.
pub fn parse_rainfall_csv(
    text: &str,
    config: &ReaderConfig,
) -> Result<(RainfallSeries, IngestReport), IngestError> {
    config.validate()?;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let header_line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or(IngestError::EmptyInput)?;

    let delimiter = config
        .delimiter
        .unwrap_or_else(|| parse::detect_delimiter(header_line));
    let delimiter_byte = u8::try_from(delimiter).map_err(|_| IngestError::InvalidConfig {
        reason: format!("delimiter {delimiter:?} is not a single byte"),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_lowercase)
        .collect();
    let column = |name: &str| {
        let key = name.trim().to_lowercase();
        header.iter().position(|h| *h == key)
    };

    let depth_idx = column(&config.depth_column).ok_or_else(|| IngestError::MissingColumn {
        name: config.depth_column.clone(),
        header: header.clone(),
    })?;
    let layout = match (
        column(&config.datetime_column),
        column(&config.date_column),
        column(&config.time_column),
    ) {
        (Some(i), _, _) => TimestampLayout::Combined(i),
        (None, Some(d), Some(t)) => TimestampLayout::Split { date: d, time: t },
        _ => {
            return Err(IngestError::MissingTimestampColumns {
                datetime: config.datetime_column.clone(),
                date: config.date_column.clone(),
                time: config.time_column.clone(),
            });
        }
    };
    debug!(?delimiter, ?layout, depth_idx, "csv header resolved");

    let mut report = IngestReport {
        delimiter,
        ..IngestReport::default()
    };
    let mut rows: Vec<(NaiveDateTime, f64)> = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let fields = record?;
        if fields.iter().all(str::is_empty) {
            continue;
        }
        report.rows_read += 1;

        let Some(timestamp) = layout.parse(&fields) else {
            trace!(row, "unparsable timestamp");
            report.bad_timestamp += 1;
            continue;
        };
        let Some(depth) = parse::parse_depth(field(&fields, depth_idx)) else {
            trace!(row, "unparsable depth");
            report.bad_depth += 1;
            continue;
        };
        if depth < 0.0 {
            trace!(row, depth, "negative depth");
            report.negative_depth += 1;
            continue;
        }
        rows.push((timestamp, depth));
    }

    rows.sort_by_key(|r| r.0);
    let before = rows.len();
    rows.dedup_by_key(|r| r.0);
    report.duplicates = before - rows.len();
    report.rows_kept = rows.len();

    if report.dropped() > 0 {
        warn!(
            bad_timestamp = report.bad_timestamp,
            bad_depth = report.bad_depth,
            negative_depth = report.negative_depth,
            duplicates = report.duplicates,
            "dropped rainfall rows"
        );
    }

    let (times, depths): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    let series = RainfallSeries::new(times, depths)?;

    info!(
        rows_read = report.rows_read,
        rows_kept = report.rows_kept,
        "rainfall series loaded"
    );

    Ok((series, report))
}

/// Where the timestamp of a row comes from.
#[derive(Debug, Clone, Copy)]
enum TimestampLayout {
    Combined(usize),
    Split { date: usize, time: usize },
}

impl TimestampLayout {
    fn parse(&self, fields: &StringRecord) -> Option<NaiveDateTime> {
        match *self {
            TimestampLayout::Combined(i) => parse::parse_datetime(field(fields, i)),
            TimestampLayout::Split { date, time } => {
                parse::parse_date_and_time(field(fields, date), field(fields, time))
            }
        }
    }
}

/// Field `i` of a row; short rows read as empty.
fn field(fields: &StringRecord, i: usize) -> &str {
    fields.get(i).unwrap_or("")
}
