//! Error types for pluvia-io.

use std::path::PathBuf;

use pluvia_maxima::MaximaError;

/// Error type for all fallible operations in the pluvia-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Returned when the input file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a failure reading the input file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Wraps a failure of the CSV tokenizer.
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// Returned when the input holds no header line.
    #[error("input is empty")]
    EmptyInput,

    /// Returned when the depth column is absent from the header.
    #[error("column '{name}' not found (header: {})", header.join(", "))]
    MissingColumn {
        /// Expected column name.
        name: String,
        /// Normalised header names that were found.
        header: Vec<String>,
    },

    /// Returned when neither a datetime column nor a date + time pair exists.
    #[error("no timestamp columns: expected '{datetime}' or '{date}' and '{time}'")]
    MissingTimestampColumns {
        /// Combined datetime column name.
        datetime: String,
        /// Date column name.
        date: String,
        /// Time-of-day column name.
        time: String,
    },

    /// Returned when a reader configuration value is invalid.
    #[error("invalid reader configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the cleaned rows do not form a valid series.
    #[error("invalid series: {0}")]
    Series(#[from] MaximaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_file_not_found() {
        let e = IngestError::FileNotFound {
            path: PathBuf::from("/data/rain.csv"),
        };
        assert_eq!(e.to_string(), "file not found: /data/rain.csv");
    }

    #[test]
    fn error_io_has_source() {
        let e = IngestError::Io {
            path: PathBuf::from("rain.csv"),
            source: std::io::Error::other("disk on fire"),
        };
        assert_eq!(e.to_string(), "failed to read rain.csv: disk on fire");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn error_missing_column() {
        let e = IngestError::MissingColumn {
            name: "precipitacao".to_string(),
            header: vec!["data".to_string(), "chuva".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "column 'precipitacao' not found (header: data, chuva)"
        );
    }

    #[test]
    fn error_missing_timestamp_columns() {
        let e = IngestError::MissingTimestampColumns {
            datetime: "datahora".to_string(),
            date: "data".to_string(),
            time: "hora".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "no timestamp columns: expected 'datahora' or 'data' and 'hora'"
        );
    }

    #[test]
    fn error_from_series() {
        let e: IngestError = MaximaError::NegativeDepth {
            index: 0,
            value: -1.0,
        }
        .into();
        assert_eq!(e.to_string(), "invalid series: negative depth -1 at index 0");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IngestError>();
    }
}
