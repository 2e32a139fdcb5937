//! Error types for the pluvia-solver crate.

/// Error type for all fallible operations in the pluvia-solver crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// Returned when the bracket endpoints are not finite or not ordered.
    #[error("invalid bracket [{lower}, {upper}]: endpoints must be finite with lower < upper")]
    InvalidBracket {
        /// Lower endpoint supplied by the caller.
        lower: f64,
        /// Upper endpoint supplied by the caller.
        upper: f64,
    },

    /// Returned when the function does not change sign over the bracket, or
    /// cannot be evaluated at one of its endpoints.
    #[error("no root in bracket [{lower}, {upper}]")]
    NoRootInBracket {
        /// Lower endpoint of the searched bracket.
        lower: f64,
        /// Upper endpoint of the searched bracket.
        upper: f64,
    },

    /// Returned when a solver setting is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_bracket() {
        let e = SolverError::InvalidBracket {
            lower: 2.0,
            upper: 1.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid bracket [2, 1]: endpoints must be finite with lower < upper"
        );
    }

    #[test]
    fn error_no_root() {
        let e = SolverError::NoRootInBracket {
            lower: 0.0001,
            upper: 50.0,
        };
        assert_eq!(e.to_string(), "no root in bracket [0.0001, 50]");
    }

    #[test]
    fn error_invalid_config() {
        let e = SolverError::InvalidConfig {
            reason: "tolerance must be > 0".to_string(),
        };
        assert_eq!(e.to_string(), "invalid configuration: tolerance must be > 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SolverError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SolverError>();
    }
}
