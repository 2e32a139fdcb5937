//! Sample statistics for the pluvia frequency-analysis crates.
//!
//! All functions operate on plain `f64` slices and never allocate unless
//! they need a sorted copy. Conventions follow the usual hydrological
//! practice: variance and standard deviation use the N-1 divisor, skewness is
//! the bias-corrected Fisher-Pearson coefficient.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Bias-corrected sample skewness (G1, the adjusted Fisher-Pearson
/// coefficient).
///
/// ```text
/// g1 = m3 / m2^(3/2)
/// G1 = g1 * sqrt(n (n - 1)) / (n - 2)
/// ```
///
/// where `m2`, `m3` are the biased central moments. Returns `None` if there
/// are fewer than 3 elements or the data are constant.
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let mean = mean(data);
    let m2 = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / nf;
    let m3 = data.iter().map(|&x| (x - mean).powi(3)).sum::<f64>() / nf;
    if m2 <= 1e-300 {
        return None;
    }
    let g1 = m3 / m2.powf(1.5);
    Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
}

/// Returns a sorted copy of `data`. NaN values compare as equal and keep
/// their relative position.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}
