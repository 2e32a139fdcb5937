//! Goodness-of-fit tests for the Gumbel fit.
//!
//! - **Kolmogorov-Smirnov**: two-sided statistic against the fitted CDF. The
//!   p-value is exact (Marsaglia-Tsang-Wang) up to [`KS_EXACT_MAX_N`]
//!   observations and asymptotic with Stephens' correction beyond.
//! - **Anderson-Darling**: statistic on the standardized residuals
//!   `(x − μ)/β` against the standard Gumbel, with the tabulated critical
//!   values for the Gumbel case.

use serde::Serialize;

use crate::gumbel::GumbelParams;

/// Largest sample size for which [`ks_p_value`] uses the exact distribution.
pub const KS_EXACT_MAX_N: usize = 100;

/// Significance levels (%) matching [`AndersonDarling::critical_values`].
pub const AD_SIGNIFICANCE_LEVELS: [f64; 5] = [25.0, 10.0, 5.0, 2.5, 1.0];

/// Asymptotic Gumbel critical values before the sample-size adjustment.
const AD_GUMBEL_BASE: [f64; 5] = [0.474, 0.637, 0.757, 0.877, 1.038];

/// Anderson-Darling statistic with its critical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndersonDarling {
    statistic: f64,
    critical_values: [f64; 5],
}

impl AndersonDarling {
    /// The A² statistic.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Critical values at 25, 10, 5, 2.5 and 1 % significance.
    pub fn critical_values(&self) -> &[f64; 5] {
        &self.critical_values
    }

    /// Returns `true` if the fit is rejected at `significance` percent.
    ///
    /// Only the tabulated levels are recognised; other levels return `false`.
    pub fn rejects_at(&self, significance: f64) -> bool {
        AD_SIGNIFICANCE_LEVELS
            .iter()
            .position(|&s| (s - significance).abs() < 1e-9)
            .is_some_and(|i| self.statistic > self.critical_values[i])
    }
}

/// Goodness-of-fit report carried by a Gumbel fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoodnessOfFit {
    ks_statistic: f64,
    ks_p_value: f64,
    anderson_darling: AndersonDarling,
}

impl GoodnessOfFit {
    /// Runs both tests of `sample` against a Gumbel with `params`.
    pub fn gumbel(sample: &[f64], params: &GumbelParams) -> Self {
        let ks_statistic = ks_statistic(sample, |x| params.cdf(x));
        let ks_p_value = ks_p_value(ks_statistic, sample.len());
        let z: Vec<f64> = sample
            .iter()
            .map(|&x| (x - params.location()) / params.scale())
            .collect();
        Self {
            ks_statistic,
            ks_p_value,
            anderson_darling: anderson_darling_gumbel(&z),
        }
    }

    /// Kolmogorov-Smirnov D statistic.
    pub fn ks_statistic(&self) -> f64 {
        self.ks_statistic
    }

    /// Kolmogorov-Smirnov p-value.
    pub fn ks_p_value(&self) -> f64 {
        self.ks_p_value
    }

    /// Anderson-Darling result.
    pub fn anderson_darling(&self) -> &AndersonDarling {
        &self.anderson_darling
    }
}

/// Two-sided Kolmogorov-Smirnov statistic of `sample` against `cdf`.
///
/// `D = max_i max(i/n − F(x₍ᵢ₎), F(x₍ᵢ₎) − (i−1)/n)`. Returns 0 for an empty
/// sample.
pub fn ks_statistic<F: Fn(f64) -> f64>(sample: &[f64], cdf: F) -> f64 {
    let sorted = pluvia_stats::sorted(sample);
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i as f64 + 1.0) / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// P-value `P(Dₙ ≥ d)` for a KS statistic `d` from `n` observations.
///
/// Exact for `n <= KS_EXACT_MAX_N`. Larger samples evaluate the Kolmogorov
/// survival function at `(√n + 0.12 + 0.11/√n)·d`. Clamped to `[0, 1]`.
pub fn ks_p_value(d: f64, n: usize) -> f64 {
    if n == 0 || !d.is_finite() {
        return f64::NAN;
    }
    if d <= 0.0 {
        return 1.0;
    }
    if d >= 1.0 {
        return 0.0;
    }
    if n <= KS_EXACT_MAX_N {
        return (1.0 - kolmogorov_cdf_exact(n, d)).clamp(0.0, 1.0);
    }
    let en = (n as f64).sqrt();
    kolmogorov_q((en + 0.12 + 0.11 / en) * d).clamp(0.0, 1.0)
}

/// Decimal exponent shifted out of matrix entries and the running product.
const SCALE_EXP: i32 = 140;
const SCALE: f64 = 1e140;

/// Exact `P(Dₙ < d)` after Marsaglia, Tsang and Wang (2003).
///
/// Builds the `m × m` matrix `H` with `k = ⌊n·d⌋ + 1`, `m = 2k − 1` and
/// `h = k − n·d`, raises it to the `n`th power and reads
/// `n!/nⁿ · (Hⁿ)ₖₖ`. Powers of ten are tracked separately to avoid overflow.
fn kolmogorov_cdf_exact(n: usize, d: f64) -> f64 {
    let nf = n as f64;
    let k = (nf * d).floor() as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nf * d;

    let mut hm = vec![0.0; m * m];
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                hm[i * m + j] = 1.0;
            }
        }
    }
    for i in 0..m {
        hm[i * m] -= h.powi(i as i32 + 1);
        hm[(m - 1) * m + i] -= h.powi((m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        hm[(m - 1) * m] += (2.0 * h - 1.0).powi(m as i32);
    }
    for i in 0..m {
        for j in 0..=(i + 1).min(m - 1) {
            for g in 1..=(i + 1 - j) {
                hm[i * m + j] /= g as f64;
            }
        }
    }

    let (q, mut exp) = matrix_power(&hm, m, n);
    let mut s = q[(k - 1) * m + k - 1];
    for i in 1..=n {
        s = s * i as f64 / nf;
        if s < 1.0 / SCALE {
            s *= SCALE;
            exp -= SCALE_EXP;
        }
    }
    s * 10f64.powi(exp)
}

fn matrix_mul(a: &[f64], b: &[f64], m: usize) -> Vec<f64> {
    let mut c = vec![0.0; m * m];
    for i in 0..m {
        for l in 0..m {
            let ail = a[i * m + l];
            if ail == 0.0 {
                continue;
            }
            for j in 0..m {
                c[i * m + j] += ail * b[l * m + j];
            }
        }
    }
    c
}

/// `aⁿ` by repeated squaring, returned as `(matrix, decimal exponent)`.
fn matrix_power(a: &[f64], m: usize, n: usize) -> (Vec<f64>, i32) {
    if n == 1 {
        return (a.to_vec(), 0);
    }
    let (half, half_exp) = matrix_power(a, m, n / 2);
    let mut b = matrix_mul(&half, &half, m);
    let mut exp = 2 * half_exp;
    if n % 2 == 1 {
        b = matrix_mul(a, &b, m);
    }
    if b[(m / 2) * m + m / 2] > SCALE {
        b.iter_mut().for_each(|v| *v /= SCALE);
        exp += SCALE_EXP;
    }
    (b, exp)
}

/// Kolmogorov survival function `Q(λ) = 2 Σ (−1)^(j−1) exp(−2 j² λ²)`.
///
/// Returns 1 when the alternating series fails to converge (small λ).
fn kolmogorov_q(lambda: f64) -> f64 {
    let a2 = -2.0 * lambda * lambda;
    let mut fac = 2.0;
    let mut sum = 0.0;
    let mut previous = 0.0;
    for j in 1..=100 {
        let jf = j as f64;
        let term = fac * (a2 * jf * jf).exp();
        sum += term;
        if term.abs() <= 1e-3 * previous || term.abs() <= 1e-8 * sum {
            return sum;
        }
        fac = -fac;
        previous = term.abs();
    }
    1.0
}

/// Anderson-Darling test of standardized values `z` against the standard
/// Gumbel distribution.
///
/// ```text
/// A² = −n − Σᵢ (2i − 1)/n · (ln F(z₍ᵢ₎) + ln(1 − F(z₍ₙ₊₁₋ᵢ₎)))
/// ```
///
/// Critical values are `[0.474, 0.637, 0.757, 0.877, 1.038] / (1 + 0.2/√n)`.
pub fn anderson_darling_gumbel(z: &[f64]) -> AndersonDarling {
    let sorted = pluvia_stats::sorted(z);
    let n = sorted.len();
    let nf = n as f64;

    let log_cdf: Vec<f64> = sorted.iter().map(|&v| -(-v).exp()).collect();
    let log_sf: Vec<f64> = sorted
        .iter()
        .map(|&v| (-(-(-v).exp()).exp_m1()).ln())
        .collect();

    let sum: f64 = (0..n)
        .map(|i| (2.0 * i as f64 + 1.0) / nf * (log_cdf[i] + log_sf[n - 1 - i]))
        .sum();
    let statistic = -nf - sum;

    let adjust = 1.0 + 0.2 / nf.sqrt();
    let critical_values = AD_GUMBEL_BASE.map(|c| c / adjust);

    AndersonDarling {
        statistic,
        critical_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ks_statistic_at_midpoint_quantiles() {
        // x_i = F⁻¹((i − 0.5)/n) gives D = 0.5/n exactly.
        let params = GumbelParams::new(10.0, 2.0).unwrap();
        let n = 8;
        let sample: Vec<f64> = (1..=n)
            .map(|i| params.inverse_cdf((i as f64 - 0.5) / n as f64))
            .collect();
        let d = ks_statistic(&sample, |x| params.cdf(x));
        assert_relative_eq!(d, 0.5 / n as f64, epsilon = 1e-12);
    }

    #[test]
    fn ks_statistic_order_independent() {
        let params = GumbelParams::new(0.0, 1.0).unwrap();
        let a = ks_statistic(&[0.3, -1.0, 2.0, 0.9], |x| params.cdf(x));
        let b = ks_statistic(&[2.0, 0.9, 0.3, -1.0], |x| params.cdf(x));
        assert_eq!(a, b);
    }

    #[test]
    fn kolmogorov_known_values() {
        assert_relative_eq!(kolmogorov_q(1.0), 0.269_999_67, epsilon = 1e-6);
        assert_relative_eq!(kolmogorov_q(1.36), 0.049_485_88, epsilon = 1e-6);
        assert_eq!(kolmogorov_q(0.01), 1.0);
    }

    #[test]
    fn ks_p_value_small_sample_is_exact() {
        assert_relative_eq!(ks_p_value(0.2, 10), 0.748_719_04, epsilon = 1e-8);
        assert_relative_eq!(ks_p_value(0.5, 5), 0.112, epsilon = 1e-10);
        assert_relative_eq!(ks_p_value(0.3, 20), 0.043_067_07, epsilon = 1e-8);
    }

    #[test]
    fn ks_p_value_single_observation() {
        // D₁ = max(U, 1 − U) is uniform on [0.5, 1].
        assert_relative_eq!(ks_p_value(0.75, 1), 0.5, epsilon = 1e-12);
        assert_relative_eq!(ks_p_value(0.4, 1), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ks_p_value_switches_to_asymptotic() {
        let exact = ks_p_value(0.1, KS_EXACT_MAX_N);
        assert_relative_eq!(exact, 0.252_692_76, epsilon = 1e-7);
        let en = ((KS_EXACT_MAX_N + 1) as f64).sqrt();
        let asymptotic = kolmogorov_q((en + 0.12 + 0.11 / en) * 0.1);
        assert_eq!(ks_p_value(0.1, KS_EXACT_MAX_N + 1), asymptotic);
    }

    #[test]
    fn ks_p_value_bounds() {
        assert_eq!(ks_p_value(0.0, 20), 1.0);
        assert!(ks_p_value(0.9, 50) < 1e-10);
        assert!(ks_p_value(0.1, 0).is_nan());
    }

    #[test]
    fn anderson_darling_known_value() {
        let ad = anderson_darling_gumbel(&[-1.2, -0.5, 0.0, 0.3, 0.8, 1.1, 1.9, 2.5]);
        assert_relative_eq!(ad.statistic(), 0.177_661_8, epsilon = 1e-6);
        let expected = [0.442_696_6, 0.594_931_9, 0.707_007_1, 0.819_082_1, 0.969_449_6];
        for (c, e) in ad.critical_values().iter().zip(expected) {
            assert_relative_eq!(*c, e, epsilon = 1e-6);
        }
        assert!(!ad.rejects_at(5.0));
    }

    #[test]
    fn anderson_darling_rejects_shifted_sample() {
        let z: Vec<f64> = (0..30).map(|i| 5.0 + i as f64 * 0.01).collect();
        let ad = anderson_darling_gumbel(&z);
        assert!(ad.rejects_at(1.0));
        assert!(!ad.rejects_at(7.0));
    }

    #[test]
    fn report_from_params() {
        let params = GumbelParams::new(0.0, 1.0).unwrap();
        let sample = [-1.2, -0.5, 0.0, 0.3, 0.8, 1.1, 1.9, 2.5];
        let report = GoodnessOfFit::gumbel(&sample, &params);
        assert_relative_eq!(
            report.anderson_darling().statistic(),
            0.177_661_8,
            epsilon = 1e-6
        );
        assert!(report.ks_p_value() > 0.05);
    }
}
