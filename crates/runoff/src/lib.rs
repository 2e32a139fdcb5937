//! Catchment runoff: Rational Method peak flow and time of concentration.
//!
//! The time of concentration sets the storm duration for a design storm;
//! the storm intensity then feeds the Rational Method:
//!
//! ```text
//! tc (Kirpich | Giandotti) ──▶ design intensity i ──▶ Q = C·i·A/360
//! ```
//!
//! All formulas are total functions: non-positive inputs give 0 rather than
//! an error.
//!
//! ```
//! use pluvia_runoff::{ConcentrationMethod, rational_flow};
//!
//! let tc = ConcentrationMethod::Kirpich { length_m: 500.0, slope: 0.02 };
//! assert!((tc.time_minutes() - 10.53).abs() < 0.01);
//! assert_eq!(rational_flow(1.0, 360.0, 1.0), 1.0);
//! ```

mod concentration;
mod error;
mod rational;

pub use concentration::{ConcentrationKind, ConcentrationMethod, giandotti_time, kirpich_time};
pub use error::RunoffError;
pub use rational::{RATIONAL_UNIT_FACTOR, rational_flow};
