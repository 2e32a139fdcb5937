//! Moving-sum aggregation and per-year maxima.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::MaximaError;
use crate::maxima::AnnualMaxima;
use crate::series::RainfallSeries;

/// Trailing moving sum over `window` consecutive samples.
///
/// Output `i` sums `depths[i + 1 - window ..= i]`, using fewer samples at
/// the start of the record (minimum one period). `NaN` samples are skipped;
/// a window holding no finite sample yields `NaN`.
///
/// `window == 0` is treated as 1.
pub fn moving_sum(depths: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..depths.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let mut total = 0.0;
            let mut valid = 0usize;
            for &d in &depths[start..=i] {
                if d.is_finite() {
                    total += d;
                    valid += 1;
                }
            }
            if valid == 0 { f64::NAN } else { total }
        })
        .collect()
}

/// Maximum `duration_hours`-hour accumulation in each calendar year.
///
/// The window runs across year boundaries: the first hours of January sum
/// with the last hours of the previous December and count toward the year of
/// the window's last sample. Only the very start of the record uses partial
/// windows. Years with no finite accumulation are dropped.
///
/// # Errors
///
/// Returns [`MaximaError::InvalidDuration`] if `duration_hours == 0`.
pub fn annual_maxima(
    series: &RainfallSeries,
    duration_hours: u32,
) -> Result<AnnualMaxima, MaximaError> {
    if duration_hours == 0 {
        return Err(MaximaError::InvalidDuration {
            hours: duration_hours,
        });
    }

    let sums = moving_sum(series.depths(), duration_hours as usize);

    let mut maxima: BTreeMap<i32, f64> = BTreeMap::new();
    for (year, total) in series.years().zip(sums) {
        if !total.is_finite() {
            continue;
        }
        maxima
            .entry(year)
            .and_modify(|m| *m = m.max(total))
            .or_insert(total);
    }

    debug!(
        duration_hours,
        n_samples = series.len(),
        n_years = maxima.len(),
        "annual maxima extracted"
    );

    Ok(AnnualMaxima::new(duration_hours, maxima))
}
