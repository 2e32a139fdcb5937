//! Gumbel (EV1, right-skewed) distribution and maximum-likelihood fit.
//!
//! The likelihood is minimised with Nelder-Mead over `[location, ln scale]`
//! so the scale stays positive without constraints. The simplex starts from
//! the method-of-moments estimate.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use pluvia_maxima::AnnualMaxima;
use serde::Serialize;
use tracing::debug;

use crate::config::MIN_SAMPLE_SIZE;
use crate::error::FrequencyError;
use crate::goodness::GoodnessOfFit;

/// Euler-Mascheroni constant, used by the moment estimator.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Validated Gumbel parameters: location μ and scale β > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GumbelParams {
    location: f64,
    scale: f64,
}

impl GumbelParams {
    /// Creates parameters after checking both are finite and `scale > 0`.
    pub fn new(location: f64, scale: f64) -> Result<Self, FrequencyError> {
        if !location.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(FrequencyError::InvalidParameters {
                reason: format!(
                    "gumbel needs finite location and scale > 0, got ({location}, {scale})"
                ),
            });
        }
        Ok(Self { location, scale })
    }

    /// Method-of-moments estimate: β = s·√6/π, μ = x̄ − γ·β.
    ///
    /// Returns `None` if the sample has fewer than two values or no spread.
    pub fn from_moments(sample: &[f64]) -> Option<Self> {
        let sd = pluvia_stats::sd(sample);
        if sample.len() < 2 || !sd.is_finite() || sd <= 0.0 {
            return None;
        }
        let scale = sd * 6f64.sqrt() / std::f64::consts::PI;
        let location = pluvia_stats::mean(sample) - EULER_GAMMA * scale;
        Self::new(location, scale).ok()
    }

    /// Location parameter μ.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter β.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cumulative distribution `exp(−exp(−(x − μ)/β))`.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        (-(-z).exp()).exp()
    }

    /// Quantile function `μ − β·ln(−ln p)`.
    ///
    /// `p = 0` gives `−∞` and `p = 1` gives `+∞`; values outside `[0, 1]`
    /// give `NaN`.
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        self.location - self.scale * (-p.ln()).ln()
    }

    /// Negative log-likelihood of `sample`.
    pub fn neg_log_likelihood(&self, sample: &[f64]) -> f64 {
        let n = sample.len() as f64;
        let sum: f64 = sample
            .iter()
            .map(|&x| {
                let z = (x - self.location) / self.scale;
                z + (-z).exp()
            })
            .sum();
        n * self.scale.ln() + sum
    }
}

/// A fitted Gumbel distribution with its goodness-of-fit report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GumbelFit {
    params: GumbelParams,
    goodness: GoodnessOfFit,
    sample_size: usize,
}

impl GumbelFit {
    /// Fits by maximum likelihood and tests the fit against the sample.
    ///
    /// # Errors
    ///
    /// - [`FrequencyError::InsufficientData`] with fewer than 5 values.
    /// - [`FrequencyError::NonFiniteData`] if a value is NaN or infinite.
    /// - [`FrequencyError::DegenerateSample`] if all values are equal.
    /// - [`FrequencyError::OptimizationFailed`] if Nelder-Mead fails.
    pub fn from_sample(sample: &[f64]) -> Result<Self, FrequencyError> {
        if sample.len() < MIN_SAMPLE_SIZE {
            return Err(FrequencyError::InsufficientData {
                n: sample.len(),
                min: MIN_SAMPLE_SIZE,
            });
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(FrequencyError::NonFiniteData);
        }

        let start =
            GumbelParams::from_moments(sample).ok_or_else(|| FrequencyError::DegenerateSample {
                reason: "annual maxima are all equal".to_string(),
            })?;

        let params = maximise_likelihood(sample, start)?;
        let goodness = GoodnessOfFit::gumbel(sample, &params);

        debug!(
            n = sample.len(),
            location = params.location(),
            scale = params.scale(),
            ks_p = goodness.ks_p_value(),
            "gumbel fitted"
        );

        Ok(Self {
            params,
            goodness,
            sample_size: sample.len(),
        })
    }

    /// Fitted parameters.
    pub fn params(&self) -> &GumbelParams {
        &self.params
    }

    /// Kolmogorov-Smirnov and Anderson-Darling results.
    pub fn goodness(&self) -> &GoodnessOfFit {
        &self.goodness
    }

    /// Number of annual maxima the fit used.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

/// Fits a Gumbel distribution to a set of annual maxima.
///
/// See [`GumbelFit::from_sample`] for the error conditions.
pub fn fit_gumbel(maxima: &AnnualMaxima) -> Result<GumbelFit, FrequencyError> {
    GumbelFit::from_sample(&maxima.values())
}

fn maximise_likelihood(
    sample: &[f64],
    start: GumbelParams,
) -> Result<GumbelParams, FrequencyError> {
    let x0 = vec![start.location(), start.scale().ln()];
    let simplex = vec![
        x0.clone(),
        vec![x0[0] + 0.5 * start.scale(), x0[1]],
        vec![x0[0], x0[1] + 0.2],
    ];

    let cost = GumbelCost { sample };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(1e-12)
        .map_err(|_| FrequencyError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(2000))
        .run()
        .map_err(|_| FrequencyError::OptimizationFailed)?;

    let best = result
        .state()
        .best_param
        .as_ref()
        .ok_or(FrequencyError::OptimizationFailed)?;

    GumbelParams::new(best[0], best[1].exp()).map_err(|_| FrequencyError::OptimizationFailed)
}

/// Cost function for argmin: negative log-likelihood over `[μ, ln β]`.
struct GumbelCost<'a> {
    sample: &'a [f64],
}

impl CostFunction for GumbelCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        match GumbelParams::new(params[0], params[1].exp()) {
            Ok(p) => {
                let nll = p.neg_log_likelihood(self.sample);
                Ok(if nll.is_finite() { nll } else { f64::MAX })
            }
            Err(_) => Ok(f64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: [f64; 10] = [42.0, 55.3, 38.1, 61.7, 47.2, 70.4, 44.9, 52.8, 58.6, 49.5];

    #[test]
    fn params_reject_bad_scale() {
        assert!(GumbelParams::new(0.0, 0.0).is_err());
        assert!(GumbelParams::new(0.0, -1.0).is_err());
        assert!(GumbelParams::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn inverse_cdf_known_values() {
        let p = GumbelParams::new(30.0, 10.0).unwrap();
        assert_relative_eq!(p.inverse_cdf(0.99), 76.001_492_3, epsilon = 1e-6);
        assert_relative_eq!(p.inverse_cdf(0.5), 33.665_129_2, epsilon = 1e-6);
        assert_eq!(p.inverse_cdf(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn cdf_inverts_quantile() {
        let p = GumbelParams::new(12.0, 3.5).unwrap();
        for prob in [0.01, 0.2, 0.5, 0.9, 0.999] {
            assert_relative_eq!(p.cdf(p.inverse_cdf(prob)), prob, epsilon = 1e-12);
        }
    }

    #[test]
    fn moments_estimate() {
        let p = GumbelParams::from_moments(&SAMPLE).unwrap();
        let sd = pluvia_stats::sd(&SAMPLE);
        assert_relative_eq!(p.scale(), sd * 6f64.sqrt() / std::f64::consts::PI);
        assert!(GumbelParams::from_moments(&[5.0; 6]).is_none());
    }

    #[test]
    fn mle_matches_score_equations() {
        let fit = GumbelFit::from_sample(&SAMPLE).unwrap();
        assert_relative_eq!(fit.params().location(), 47.604_053, epsilon = 1e-3);
        assert_relative_eq!(fit.params().scale(), 7.860_000, epsilon = 1e-3);
        assert_eq!(fit.sample_size(), 10);
    }

    #[test]
    fn mle_beats_moment_estimate() {
        let fit = GumbelFit::from_sample(&SAMPLE).unwrap();
        let mom = GumbelParams::from_moments(&SAMPLE).unwrap();
        assert!(
            fit.params().neg_log_likelihood(&SAMPLE) <= mom.neg_log_likelihood(&SAMPLE) + 1e-9
        );
    }

    #[test]
    fn too_few_values() {
        let result = GumbelFit::from_sample(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            result,
            Err(FrequencyError::InsufficientData { n: 4, min: 5 })
        );
    }

    #[test]
    fn non_finite_rejected() {
        let result = GumbelFit::from_sample(&[1.0, 2.0, f64::NAN, 4.0, 5.0]);
        assert_eq!(result, Err(FrequencyError::NonFiniteData));
    }

    #[test]
    fn constant_sample_rejected() {
        let result = GumbelFit::from_sample(&[7.0; 8]);
        assert!(matches!(
            result,
            Err(FrequencyError::DegenerateSample { .. })
        ));
    }

    #[test]
    fn fit_from_annual_maxima() {
        let maxima = AnnualMaxima::from_pairs(24, (2000..).zip(SAMPLE));
        let fit = fit_gumbel(&maxima).unwrap();
        assert_eq!(fit.sample_size(), 10);
    }
}
