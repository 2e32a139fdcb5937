//! Bisection on a sign-changing bracket.

use tracing::trace;

use crate::error::SolverError;

/// Default absolute tolerance on both `|f(x)|` and the bracket width.
const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum number of halvings.
const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Bisection root finder.
///
/// Terminates as soon as `|f(mid)| < tolerance` or the bracket width drops
/// below `tolerance`, or after `max_iterations` halvings, and returns the
/// bracket midpoint clamped to `>= 0`.
///
/// # Example
///
/// ```
/// use pluvia_solver::Bisection;
///
/// let solver = Bisection::new().with_max_iterations(200);
/// let y = solver.solve(|y| y.powi(3) - 8.0, 0.0, 10.0).unwrap();
/// assert!((y - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    tolerance: f64,
    max_iterations: usize,
}

impl Bisection {
    /// Creates a solver with defaults: `tolerance = 1e-6`,
    /// `max_iterations = 100`.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the absolute tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of halvings.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Returns the absolute tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of halvings.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SolverError::InvalidConfig {
                reason: format!("tolerance must be finite and > 0, got {}", self.tolerance),
            });
        }
        if self.max_iterations < 1 {
            return Err(SolverError::InvalidConfig {
                reason: format!("max_iterations must be >= 1, got {}", self.max_iterations),
            });
        }
        Ok(())
    }

    /// Finds a root of `f` in `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidConfig`] if the solver settings are invalid.
    /// - [`SolverError::InvalidBracket`] if the endpoints are not finite or
    ///   `lower >= upper`.
    /// - [`SolverError::NoRootInBracket`] if `f(lower)` and `f(upper)` have the
    ///   same sign or either is not finite.
    pub fn solve<F>(&self, f: F, lower: f64, upper: f64) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        self.validate()?;
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(SolverError::InvalidBracket { lower, upper });
        }

        let mut f_lo = f(lower);
        let f_hi = f(upper);
        if !f_lo.is_finite() || !f_hi.is_finite() || f_lo * f_hi > 0.0 {
            trace!(lower, upper, f_lo, f_hi, "no sign change");
            return Err(SolverError::NoRootInBracket { lower, upper });
        }

        // An endpoint that is already a root would otherwise be walked away
        // from, since f_lo * f_mid == 0 never narrows the upper side.
        if f_lo.abs() < self.tolerance {
            return Ok(lower.max(0.0));
        }
        if f_hi.abs() < self.tolerance {
            return Ok(upper.max(0.0));
        }

        let (mut lo, mut hi) = (lower, upper);
        for iter in 0..self.max_iterations {
            let mid = 0.5 * (lo + hi);
            let f_mid = f(mid);
            if f_mid.abs() < self.tolerance || (hi - lo) < self.tolerance {
                trace!(iter, root = mid, "bisection converged");
                return Ok(mid.max(0.0));
            }
            if f_lo * f_mid < 0.0 {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        let mid = 0.5 * (lo + hi);
        trace!(
            max_iterations = self.max_iterations,
            root = mid,
            "bisection hit iteration limit"
        );
        Ok(mid.max(0.0))
    }
}

impl Default for Bisection {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds a root of `f` in `[lower, upper]` with the default [`Bisection`]
/// settings.
pub fn bisect<F>(f: F, lower: f64, upper: f64) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    Bisection::new().solve(f, lower, upper)
}
