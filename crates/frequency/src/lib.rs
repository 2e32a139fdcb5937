//! Extreme-value frequency analysis of annual rainfall maxima.
//!
//! Two distributions are fitted to the same sample of annual maxima:
//!
//! - **Gumbel** (EV1) by maximum likelihood, with Kolmogorov-Smirnov and
//!   Anderson-Darling goodness-of-fit tests.
//! - **Log-Pearson III** by moments of `log10(x)` (mean, N-1 standard
//!   deviation, bias-corrected skew).
//!
//! Either fit is inverted at a return period `TR` through the quantile at
//! `p = 1 − 1/TR`, producing the depth (mm) for the fitted duration; the
//! intensity (mm/h) is depth over duration.
//!
//! # Glossary
//!
//! - **TR**: return period, mean recurrence interval in years
//! - **IDF**: Intensity-Duration-Frequency
//! - **K**: Pearson III frequency factor, standardized quantile
//!
//! # Quick Start
//!
//! ```
//! use pluvia_frequency::{DesignStorm, FrequencyConfig, Method, build_idf};
//! use pluvia_maxima::AnnualMaxima;
//!
//! let values = [42.0, 55.3, 38.1, 61.7, 47.2, 70.4, 44.9, 52.8];
//! let maxima = AnnualMaxima::from_pairs(24, (1990..).zip(values));
//!
//! let analysis = build_idf(&maxima, &FrequencyConfig::new()).unwrap();
//! let fit = analysis.fit_for(Method::Gumbel).unwrap();
//! let storm = DesignStorm::derive(&fit, 25.0, 24, 24.0).unwrap();
//! assert!(storm.depth() > 60.0);
//! ```

mod config;
mod design;
mod distribution;
mod error;
mod goodness;
mod gumbel;
mod idf;
mod pearson;

pub use config::{FrequencyConfig, MIN_SAMPLE_SIZE};
pub use design::DesignStorm;
pub use distribution::{Distribution, Method, non_exceedance_probability};
pub use error::FrequencyError;
pub use goodness::{
    AD_SIGNIFICANCE_LEVELS, AndersonDarling, GoodnessOfFit, KS_EXACT_MAX_N,
    anderson_darling_gumbel, ks_p_value, ks_statistic,
};
pub use gumbel::{GumbelFit, GumbelParams, fit_gumbel};
pub use idf::{EmpiricalPoint, IdfAnalysis, IdfRow, IdfTable, build_idf, plotting_positions};
pub use pearson::{
    LogPearson3Fit, LogPearson3Params, ZERO_SKEW_THRESHOLD, fit_log_pearson3, frequency_factor,
};
