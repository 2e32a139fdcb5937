//! Annual-maxima extraction from hourly rainfall records.
//!
//! # Pipeline
//!
//! ```text
//!  RainfallSeries ──▶ trailing moving sum (duration h, min periods 1)
//!                 ──▶ group by calendar year ──▶ max per year ──▶ AnnualMaxima
//! ```
//!
//! The series is assumed hourly and gap-free; each sample counts as one hour
//! regardless of its timestamp. Missing depths (`NaN`) are skipped inside a
//! window, and a window without any valid sample is itself missing.
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use pluvia_maxima::{RainfallSeries, annual_maxima};
//!
//! let t0 = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let times = (0..3).map(|h| t0 + chrono::TimeDelta::hours(h)).collect();
//! let series = RainfallSeries::new(times, vec![10.0, 25.0, 5.0]).unwrap();
//!
//! let maxima = annual_maxima(&series, 2).unwrap();
//! assert_eq!(maxima.get(2020), Some(35.0));
//! ```

mod error;
mod extract;
mod maxima;
mod series;
mod totals;

pub use error::MaximaError;
pub use extract::{annual_maxima, moving_sum};
pub use maxima::AnnualMaxima;
pub use series::RainfallSeries;
pub use totals::{Period, PeriodTotal, period_totals};
