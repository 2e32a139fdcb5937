//! Error types for the pluvia-maxima crate.

/// Error type for all fallible operations in the pluvia-maxima crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MaximaError {
    /// Returned when timestamps and depths differ in length.
    #[error("length mismatch: {timestamps} timestamps, {depths} depths")]
    LengthMismatch {
        /// Number of timestamps.
        timestamps: usize,
        /// Number of depth values.
        depths: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps not strictly increasing at index {index}")]
    UnsortedTimestamps {
        /// Index of the first offending timestamp.
        index: usize,
    },

    /// Returned when a depth is negative.
    #[error("negative depth {value} at index {index}")]
    NegativeDepth {
        /// Index of the offending sample.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when the aggregation window is zero hours.
    #[error("invalid duration: {hours} h (must be >= 1)")]
    InvalidDuration {
        /// The rejected duration.
        hours: u32,
    },

    /// Returned when an aggregation period name cannot be parsed.
    #[error("unknown period: {name:?} (expected daily, monthly or annual)")]
    UnknownPeriod {
        /// The unrecognised name.
        name: String,
    },
}
