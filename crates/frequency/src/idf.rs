//! Intensity-Duration-Frequency table for one aggregation duration.

use pluvia_maxima::AnnualMaxima;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::FrequencyConfig;
use crate::distribution::{Distribution, Method};
use crate::error::FrequencyError;
use crate::gumbel::GumbelFit;
use crate::pearson::LogPearson3Fit;

/// One return period of the IDF table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdfRow {
    /// Return period (years).
    pub return_period: f64,
    /// Gumbel depth (mm).
    pub gumbel_depth: f64,
    /// Log-Pearson III depth (mm), absent when the fit failed.
    pub lp3_depth: Option<f64>,
    /// Gumbel intensity (mm/h).
    pub gumbel_intensity: f64,
    /// Log-Pearson III intensity (mm/h), absent when the fit failed.
    pub lp3_intensity: Option<f64>,
}

impl IdfRow {
    /// Depth under `method`.
    pub fn depth(&self, method: Method) -> Option<f64> {
        match method {
            Method::Gumbel => Some(self.gumbel_depth),
            Method::LogPearson3 => self.lp3_depth,
        }
    }

    /// Intensity under `method`.
    pub fn intensity(&self, method: Method) -> Option<f64> {
        match method {
            Method::Gumbel => Some(self.gumbel_intensity),
            Method::LogPearson3 => self.lp3_intensity,
        }
    }
}

/// IDF rows in the configured return-period order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdfTable {
    duration_hours: u32,
    rows: Vec<IdfRow>,
}

impl IdfTable {
    /// Duration (hours) the table was fitted for.
    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    /// Table rows.
    pub fn rows(&self) -> &[IdfRow] {
        &self.rows
    }

    /// Row for an exact return period, if tabulated.
    pub fn row(&self, return_period: f64) -> Option<&IdfRow> {
        self.rows
            .iter()
            .find(|r| (r.return_period - return_period).abs() < 1e-9)
    }
}

/// An observed annual maximum with its Weibull plotting position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmpiricalPoint {
    /// Calendar year of the maximum.
    pub year: i32,
    /// Observed depth (mm).
    pub depth: f64,
    /// Empirical return period `(n + 1)/rank`, rank 1 being the largest.
    pub return_period: f64,
}

/// Empirical return periods of annual maxima, largest first.
pub fn plotting_positions(maxima: &AnnualMaxima) -> Vec<EmpiricalPoint> {
    let mut pairs: Vec<(i32, f64)> = maxima.iter().collect();
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
    let n = pairs.len() as f64;
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (year, depth))| EmpiricalPoint {
            year,
            depth,
            return_period: (n + 1.0) / (i as f64 + 1.0),
        })
        .collect()
}

/// Both fits for one duration plus the resulting IDF table.
///
/// The Gumbel fit is always present. Log-Pearson III is fitted on the
/// positive maxima only and may be missing when too few remain or their
/// logs have no spread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdfAnalysis {
    duration_hours: u32,
    gumbel: GumbelFit,
    log_pearson3: Option<LogPearson3Fit>,
    table: IdfTable,
    empirical: Vec<EmpiricalPoint>,
}

impl IdfAnalysis {
    /// Aggregation duration (hours).
    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    /// Gumbel fit with goodness of fit.
    pub fn gumbel(&self) -> &GumbelFit {
        &self.gumbel
    }

    /// Log-Pearson III fit, if it succeeded.
    pub fn log_pearson3(&self) -> Option<&LogPearson3Fit> {
        self.log_pearson3.as_ref()
    }

    /// The IDF table.
    pub fn table(&self) -> &IdfTable {
        &self.table
    }

    /// Observed maxima with plotting positions.
    pub fn empirical(&self) -> &[EmpiricalPoint] {
        &self.empirical
    }

    /// Fitted distribution for `method`; `None` for a failed
    /// Log-Pearson III fit.
    pub fn fit_for(&self, method: Method) -> Option<Distribution> {
        match method {
            Method::Gumbel => Some(Distribution::Gumbel(*self.gumbel.params())),
            Method::LogPearson3 => self
                .log_pearson3
                .as_ref()
                .map(|fit| Distribution::LogPearson3(*fit.params())),
        }
    }
}

/// Fits Gumbel and Log-Pearson III to `maxima` and tabulates depth and
/// intensity at each configured return period.
///
/// Intensity is depth divided by the maxima's duration.
///
/// # Errors
///
/// - [`FrequencyError::InvalidConfig`] if `config` fails validation.
/// - [`FrequencyError::InsufficientData`] with fewer maxima than
///   `config.min_sample_size()`.
/// - Any Gumbel fit error.
///
/// A Log-Pearson III failure does not abort the analysis: it is logged and
/// the LP3 columns are left empty.
pub fn build_idf(
    maxima: &AnnualMaxima,
    config: &FrequencyConfig,
) -> Result<IdfAnalysis, FrequencyError> {
    config.validate()?;

    if maxima.len() < config.min_sample_size() {
        return Err(FrequencyError::InsufficientData {
            n: maxima.len(),
            min: config.min_sample_size(),
        });
    }

    let sample = maxima.values();
    let gumbel = GumbelFit::from_sample(&sample)?;
    let log_pearson3 = match LogPearson3Fit::from_sample(&sample) {
        Ok(fit) => Some(fit),
        Err(err) => {
            warn!(
                duration_hours = maxima.duration_hours(),
                %err,
                "log-pearson III fit skipped"
            );
            None
        }
    };

    let gumbel_dist = Distribution::Gumbel(*gumbel.params());
    let lp3_dist = log_pearson3
        .as_ref()
        .map(|fit| Distribution::LogPearson3(*fit.params()));
    let duration = f64::from(maxima.duration_hours());

    let rows = config
        .return_periods()
        .iter()
        .map(|&tr| {
            let gumbel_depth = gumbel_dist.invert(tr)?;
            let lp3_depth = lp3_dist.map(|d| d.invert(tr)).transpose()?;
            debug!(tr, gumbel_depth, ?lp3_depth, "idf row");
            Ok(IdfRow {
                return_period: tr,
                gumbel_depth,
                lp3_depth,
                gumbel_intensity: gumbel_depth / duration,
                lp3_intensity: lp3_depth.map(|d| d / duration),
            })
        })
        .collect::<Result<Vec<_>, FrequencyError>>()?;

    info!(
        duration_hours = maxima.duration_hours(),
        n_years = maxima.len(),
        n_rows = rows.len(),
        "idf table built"
    );

    Ok(IdfAnalysis {
        duration_hours: maxima.duration_hours(),
        gumbel,
        log_pearson3,
        table: IdfTable {
            duration_hours: maxima.duration_hours(),
            rows,
        },
        empirical: plotting_positions(maxima),
    })
}
