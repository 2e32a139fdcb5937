//! # pluvia-io
//!
//! Read hourly rainfall records from CSV text into a
//! [`pluvia_maxima::RainfallSeries`].
//!
//! ## Accepted layout
//!
//! - Delimiter `;`, tab or `,`, detected from the header line in that order
//!   of preference (or forced via [`ReaderConfig::with_delimiter`]).
//! - Header names are trimmed and matched case-insensitively.
//! - Depth column `precipitacao`, decimal comma or dot.
//! - Timestamp from a `datahora` column, or from `data` (date) plus `hora`
//!   (`HHMM`, zero-padded to four digits).
//!
//! Rows that fail to parse are dropped and counted in an [`IngestReport`];
//! the kept rows are sorted and de-duplicated by timestamp.
//!
//! ```
//! use pluvia_io::{ReaderConfig, parse_rainfall_csv};
//!
//! let text = "data;hora;precipitacao\n2021-01-01;0;0,0\n2021-01-01;100;12,5\n";
//! let (series, report) = parse_rainfall_csv(text, &ReaderConfig::default()).unwrap();
//! assert_eq!(series.depths(), &[0.0, 12.5]);
//! assert_eq!(report.dropped(), 0);
//! ```

mod error;
mod parse;
mod reader;

pub use error::IngestError;
pub use reader::{IngestReport, ReaderConfig, parse_rainfall_csv, read_rainfall_csv};
