//! Bracketed scalar root finding.
//!
//! The hydraulic inverse problems (normal depth, critical depth, required
//! base width) are all monotone scalar equations over a physically bounded
//! interval. This crate solves them by bisection.
//!
//! # Quick Start
//!
//! ```
//! use pluvia_solver::{Bisection, bisect};
//!
//! // Default settings: tolerance 1e-6, at most 100 iterations.
//! let root = bisect(|x| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - 2f64.sqrt()).abs() < 1e-5);
//!
//! let solver = Bisection::new().with_tolerance(1e-10);
//! let root = solver.solve(|x| x - 0.25, 0.0, 1.0).unwrap();
//! assert!((root - 0.25).abs() < 1e-9);
//! ```
//!
//! Results are clamped to be non-negative: every caller in this workspace
//! solves for a depth, width or diameter.

mod bisection;
mod error;

pub use bisection::{Bisection, bisect};
pub use error::SolverError;
