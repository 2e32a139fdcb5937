//! Log-Pearson type III distribution: moment fit in log10 space and
//! quantiles via the Pearson III frequency factor.

use pluvia_maxima::AnnualMaxima;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Gamma, Normal};
use tracing::debug;

use crate::config::MIN_SAMPLE_SIZE;
use crate::error::FrequencyError;

/// Below this |skew| the Pearson III reduces to the normal distribution.
pub const ZERO_SKEW_THRESHOLD: f64 = 1e-5;

/// Log-Pearson III parameters: moments of `log10(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogPearson3Params {
    mean_log: f64,
    std_log: f64,
    skew: f64,
}

impl LogPearson3Params {
    /// Creates parameters after checking all are finite and `std_log > 0`.
    pub fn new(mean_log: f64, std_log: f64, skew: f64) -> Result<Self, FrequencyError> {
        if !mean_log.is_finite() || !std_log.is_finite() || !skew.is_finite() || std_log <= 0.0 {
            return Err(FrequencyError::InvalidParameters {
                reason: format!(
                    "log-pearson III needs finite moments and std_log > 0, \
                     got ({mean_log}, {std_log}, {skew})"
                ),
            });
        }
        Ok(Self {
            mean_log,
            std_log,
            skew,
        })
    }

    /// Mean of the log10 sample.
    pub fn mean_log(&self) -> f64 {
        self.mean_log
    }

    /// Standard deviation (N-1) of the log10 sample.
    pub fn std_log(&self) -> f64 {
        self.std_log
    }

    /// Bias-corrected skewness of the log10 sample.
    pub fn skew(&self) -> f64 {
        self.skew
    }

    /// Quantile at non-exceedance probability `p`, back-transformed:
    /// `10^(mean_log + K(skew, p)·std_log)`.
    pub fn inverse_cdf(&self, p: f64) -> Result<f64, FrequencyError> {
        let k = frequency_factor(self.skew, p)?;
        Ok(10f64.powf(self.mean_log + k * self.std_log))
    }
}

/// Pearson III frequency factor `K` for skew `g` at probability `p`.
///
/// With `|g| < 1e-5`, `K` is the standard normal quantile. Otherwise, with
/// `α = 4/g²`:
///
/// ```text
/// K = sign(g) · (Γ⁻¹_α(p*) · |g|/2 − 2/|g|),   p* = p if g > 0, else 1 − p
/// ```
///
/// where `Γ⁻¹_α` is the inverse CDF of Gamma(α, 1). At `p = 0` this is the
/// lower bound `−2/g` for positive skew and `−∞` otherwise.
///
/// # Errors
///
/// [`FrequencyError::InvalidParameters`] if `p` is outside `[0, 1]`;
/// [`FrequencyError::Distribution`] if statrs rejects the shape.
pub fn frequency_factor(skew: f64, p: f64) -> Result<f64, FrequencyError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(FrequencyError::InvalidParameters {
            reason: format!("probability must be in [0, 1], got {p}"),
        });
    }

    if skew.abs() < ZERO_SKEW_THRESHOLD {
        if p <= 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p >= 1.0 {
            return Ok(f64::INFINITY);
        }
        let normal = Normal::new(0.0, 1.0).map_err(|e| FrequencyError::Distribution {
            message: e.to_string(),
        })?;
        return Ok(normal.inverse_cdf(p));
    }

    if p <= 0.0 {
        return Ok(if skew > 0.0 {
            -2.0 / skew
        } else {
            f64::NEG_INFINITY
        });
    }
    if p >= 1.0 {
        return Ok(if skew > 0.0 {
            f64::INFINITY
        } else {
            -2.0 / skew
        });
    }

    let g = skew.abs();
    let alpha = 4.0 / (g * g);
    let gamma = Gamma::new(alpha, 1.0).map_err(|e| FrequencyError::Distribution {
        message: format!("gamma(shape={alpha}): {e}"),
    })?;
    let p_star = if skew > 0.0 { p } else { 1.0 - p };
    let k = gamma.inverse_cdf(p_star) * g / 2.0 - 2.0 / g;
    Ok(skew.signum() * k)
}

/// A fitted Log-Pearson III distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogPearson3Fit {
    params: LogPearson3Params,
    sample_size: usize,
    excluded: usize,
}

impl LogPearson3Fit {
    /// Fits by moments of `log10(x)` over the strictly positive values.
    ///
    /// Zero values are excluded from the log sample (and counted).
    ///
    /// # Errors
    ///
    /// - [`FrequencyError::NonFiniteData`] if a value is NaN or infinite.
    /// - [`FrequencyError::InsufficientData`] with fewer than 5 positive
    ///   values.
    /// - [`FrequencyError::DegenerateSample`] if the logs have no spread.
    pub fn from_sample(sample: &[f64]) -> Result<Self, FrequencyError> {
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(FrequencyError::NonFiniteData);
        }

        let logs: Vec<f64> = sample
            .iter()
            .filter(|&&x| x > 0.0)
            .map(|x| x.log10())
            .collect();
        let excluded = sample.len() - logs.len();

        if logs.len() < MIN_SAMPLE_SIZE {
            return Err(FrequencyError::InsufficientData {
                n: logs.len(),
                min: MIN_SAMPLE_SIZE,
            });
        }

        let mean_log = pluvia_stats::mean(&logs);
        let std_log = pluvia_stats::sd(&logs);
        let skew = pluvia_stats::skewness(&logs).ok_or_else(|| {
            FrequencyError::DegenerateSample {
                reason: "log10 of annual maxima has no spread".to_string(),
            }
        })?;
        let params = LogPearson3Params::new(mean_log, std_log, skew).map_err(|_| {
            FrequencyError::DegenerateSample {
                reason: "log10 of annual maxima has no spread".to_string(),
            }
        })?;

        debug!(
            n = logs.len(),
            excluded, mean_log, std_log, skew, "log-pearson III fitted"
        );

        Ok(Self {
            params,
            sample_size: logs.len(),
            excluded,
        })
    }

    /// Fitted parameters.
    pub fn params(&self) -> &LogPearson3Params {
        &self.params
    }

    /// Number of positive values the fit used.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of non-positive values left out of the log sample.
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

/// Fits a Log-Pearson III distribution to a set of annual maxima.
///
/// See [`LogPearson3Fit::from_sample`] for the error conditions.
pub fn fit_log_pearson3(maxima: &AnnualMaxima) -> Result<LogPearson3Fit, FrequencyError> {
    LogPearson3Fit::from_sample(&maxima.values())
}
