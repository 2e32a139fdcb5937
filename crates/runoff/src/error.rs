//! Error types for the pluvia-runoff crate.

/// Error type for all fallible operations in the pluvia-runoff crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunoffError {
    /// Returned when a concentration-time method name cannot be parsed.
    #[error("unknown concentration method: {name:?} (expected kirpich or giandotti)")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when the catchment relief is not positive.
    #[error("invalid relief: max elevation {max} m must exceed min elevation {min} m")]
    InvalidRelief {
        /// Highest elevation (m).
        max: f64,
        /// Lowest elevation (m).
        min: f64,
    },
}
