//! Error types for the pluvia-hydraulics crate.

/// Error type for the fallible constructors in the pluvia-hydraulics crate.
///
/// The formulas and solvers themselves do not return errors: see the crate
/// documentation for the sentinel and absence conventions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HydraulicsError {
    /// Returned when a material name is not recognised.
    #[error("unknown material: '{name}'")]
    UnknownMaterial {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when a Manning roughness coefficient is not finite and positive.
    #[error("invalid roughness: {value} (must be finite and > 0)")]
    InvalidRoughness {
        /// The rejected coefficient.
        value: f64,
    },

    /// Returned when a search range is empty or not finite.
    #[error("invalid search range [{min}, {max}]: bounds must be finite with 0 <= min < max")]
    InvalidSearchRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}
