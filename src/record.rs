//! Reading the rainfall record and writing JSON results.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};

use pluvia_io::read_rainfall_csv;
use pluvia_maxima::RainfallSeries;

use crate::config::IoToml;
use crate::convert;

/// Reads and cleans the rainfall CSV at `path`.
pub fn load_series(path: &Path, io: &IoToml) -> Result<RainfallSeries> {
    let reader_cfg = convert::build_reader_config(io)?;

    info!(path = %path.display(), "reading rainfall record");
    let (series, report) = read_rainfall_csv(path, &reader_cfg)
        .with_context(|| format!("failed to read rainfall CSV: {}", path.display()))?;

    if report.dropped() > 0 {
        warn!(
            bad_timestamp = report.bad_timestamp,
            bad_depth = report.bad_depth,
            negative_depth = report.negative_depth,
            duplicates = report.duplicates,
            "rows dropped during ingestion"
        );
    }
    info!(
        delimiter = %report.delimiter,
        rows_read = report.rows_read,
        rows_kept = report.rows_kept,
        "rainfall record loaded"
    );

    if series.is_empty() {
        bail!("no usable rows in {}", path.display());
    }
    Ok(series)
}

/// Pretty-prints `value` as JSON to `output`, or to stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise result")?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
