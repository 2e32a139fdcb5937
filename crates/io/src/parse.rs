//! Field-level parsing: delimiter detection, numbers and timestamps.
//!
//! **Not part of the public API.**

use chrono::{NaiveDate, NaiveDateTime};

/// Combined date-time layouts tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only layouts, read as midnight when used alone.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Picks the delimiter from the header line: `;`, then tab, then `,`.
pub(crate) fn detect_delimiter(header: &str) -> char {
    [';', '\t']
        .into_iter()
        .find(|&c| header.contains(c))
        .unwrap_or(',')
}

/// Parses a depth, accepting a decimal comma. Non-finite values are `None`.
pub(crate) fn parse_depth(field: &str) -> Option<f64> {
    let normalised = field.replace(',', ".");
    normalised.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a combined timestamp; a bare date is midnight.
pub(crate) fn parse_datetime(field: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(field, fmt).ok())
        .or_else(|| parse_date(field).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

fn parse_date(field: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(field, fmt).ok())
}

/// Joins a date field with an `HHMM` time field.
///
/// The time is digits only (an `HH:MM` colon is tolerated), left-padded with
/// zeros to four digits: `"0"` is 00:00, `"130"` is 01:30, `"2300"` is 23:00.
pub(crate) fn parse_date_and_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let digits: String = time.chars().filter(|&c| c != ':').collect();
    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{digits:0>4}");
    let hour: u32 = padded[..2].parse().ok()?;
    let minute: u32 = padded[2..].parse().ok()?;
    parse_date(date)?.and_hms_opt(hour, minute, 0)
}
