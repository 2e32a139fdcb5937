//! Error types for the pluvia-frequency crate.

/// Error type for all fallible operations in the pluvia-frequency crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrequencyError {
    /// Returned when the sample is too small to fit a distribution.
    #[error("insufficient data: {n} values, need at least {min}")]
    InsufficientData {
        /// Number of usable values.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when the sample contains NaN or infinite values.
    #[error("sample contains non-finite values")]
    NonFiniteData,

    /// Returned when the sample has no spread.
    #[error("degenerate sample: {reason}")]
    DegenerateSample {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a return period is below one year or not finite.
    #[error("invalid return period: {value} (must be finite and >= 1)")]
    InvalidReturnPeriod {
        /// The rejected return period.
        value: f64,
    },

    /// Returned when distribution parameters are out of range.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a method name cannot be parsed.
    #[error("unknown method: {name:?} (expected gumbel or lp3)")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when the likelihood optimizer fails.
    #[error("maximum-likelihood optimization failed")]
    OptimizationFailed,

    /// Returned when a statrs distribution cannot be constructed.
    ///
    /// Carries the message as a `String` because statrs errors are not
    /// `Clone`.
    #[error("distribution construction failed: {message}")]
    Distribution {
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_insufficient_data() {
        let e = FrequencyError::InsufficientData { n: 3, min: 5 };
        assert_eq!(e.to_string(), "insufficient data: 3 values, need at least 5");
    }

    #[test]
    fn error_non_finite() {
        assert_eq!(
            FrequencyError::NonFiniteData.to_string(),
            "sample contains non-finite values"
        );
    }

    #[test]
    fn error_degenerate() {
        let e = FrequencyError::DegenerateSample {
            reason: "constant sample".to_string(),
        };
        assert_eq!(e.to_string(), "degenerate sample: constant sample");
    }

    #[test]
    fn error_invalid_return_period() {
        let e = FrequencyError::InvalidReturnPeriod { value: 0.5 };
        assert_eq!(
            e.to_string(),
            "invalid return period: 0.5 (must be finite and >= 1)"
        );
    }

    #[test]
    fn error_invalid_parameters() {
        let e = FrequencyError::InvalidParameters {
            reason: "scale must be > 0".to_string(),
        };
        assert_eq!(e.to_string(), "invalid parameters: scale must be > 0");
    }

    #[test]
    fn error_invalid_config() {
        let e = FrequencyError::InvalidConfig {
            reason: "no return periods".to_string(),
        };
        assert_eq!(e.to_string(), "invalid configuration: no return periods");
    }

    #[test]
    fn error_unknown_method() {
        let e = FrequencyError::UnknownMethod {
            name: "weibull".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unknown method: \"weibull\" (expected gumbel or lp3)"
        );
    }

    #[test]
    fn error_optimization_failed() {
        assert_eq!(
            FrequencyError::OptimizationFailed.to_string(),
            "maximum-likelihood optimization failed"
        );
    }

    #[test]
    fn error_distribution() {
        let e = FrequencyError::Distribution {
            message: "shape must be positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "distribution construction failed: shape must be positive"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<FrequencyError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<FrequencyError>();
    }
}
