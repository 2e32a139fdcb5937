//! Configuration for frequency analysis.

use crate::error::FrequencyError;

/// Smallest sample any fit accepts.
pub const MIN_SAMPLE_SIZE: usize = 5;

/// Configuration for IDF table construction.
///
/// # Example
///
/// ```
/// use pluvia_frequency::FrequencyConfig;
///
/// let config = FrequencyConfig::new()
///     .with_return_periods(vec![2.0, 10.0, 100.0])
///     .with_min_sample_size(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyConfig {
    return_periods: Vec<f64>,
    min_sample_size: usize,
}

impl FrequencyConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `return_periods = [2, 5, 10, 25, 50, 100]`,
    /// `min_sample_size = 5`.
    pub fn new() -> Self {
        Self {
            return_periods: vec![2.0, 5.0, 10.0, 25.0, 50.0, 100.0],
            min_sample_size: MIN_SAMPLE_SIZE,
        }
    }

    /// Sets the return periods (years) tabulated in the IDF table.
    pub fn with_return_periods(mut self, periods: Vec<f64>) -> Self {
        self.return_periods = periods;
        self
    }

    /// Sets the minimum number of annual maxima required for fitting.
    pub fn with_min_sample_size(mut self, n: usize) -> Self {
        self.min_sample_size = n;
        self
    }

    /// Returns the tabulated return periods.
    pub fn return_periods(&self) -> &[f64] {
        &self.return_periods
    }

    /// Returns the minimum sample size.
    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }

    /// Validates this configuration.
    ///
    /// Checks that at least one return period is given, every return period
    /// is finite and `>= 1`, and `min_sample_size >= 5`.
    pub fn validate(&self) -> Result<(), FrequencyError> {
        if self.return_periods.is_empty() {
            return Err(FrequencyError::InvalidConfig {
                reason: "return_periods must not be empty".to_string(),
            });
        }

        if let Some(&bad) = self
            .return_periods
            .iter()
            .find(|tr| !tr.is_finite() || **tr < 1.0)
        {
            return Err(FrequencyError::InvalidConfig {
                reason: format!("return periods must be finite and >= 1, got {bad}"),
            });
        }

        if self.min_sample_size < MIN_SAMPLE_SIZE {
            return Err(FrequencyError::InvalidConfig {
                reason: format!(
                    "min_sample_size must be >= {MIN_SAMPLE_SIZE}, got {}",
                    self.min_sample_size
                ),
            });
        }

        Ok(())
    }
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = FrequencyConfig::default();
        assert_eq!(c.return_periods(), &[2.0, 5.0, 10.0, 25.0, 50.0, 100.0]);
        assert_eq!(c.min_sample_size(), 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let c = FrequencyConfig::new()
            .with_return_periods(vec![1.0, 500.0])
            .with_min_sample_size(20);
        assert_eq!(c.return_periods(), &[1.0, 500.0]);
        assert_eq!(c.min_sample_size(), 20);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_return_periods_rejected() {
        let c = FrequencyConfig::new().with_return_periods(vec![]);
        assert!(matches!(
            c.validate(),
            Err(FrequencyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn return_period_below_one_rejected() {
        let c = FrequencyConfig::new().with_return_periods(vec![2.0, 0.5]);
        assert!(matches!(
            c.validate(),
            Err(FrequencyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn nan_return_period_rejected() {
        let c = FrequencyConfig::new().with_return_periods(vec![f64::NAN]);
        assert!(c.validate().is_err());
    }

    #[test]
    fn small_min_sample_rejected() {
        let c = FrequencyConfig::new().with_min_sample_size(4);
        assert!(matches!(
            c.validate(),
            Err(FrequencyError::InvalidConfig { .. })
        ));
    }
}
