//! Design storm: depth and intensity at a chosen return period.

use serde::Serialize;
use tracing::{debug, warn};

use crate::distribution::{Distribution, Method};
use crate::error::FrequencyError;

/// Rainfall depth and intensity for a design return period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignStorm {
    method: Method,
    return_period: f64,
    depth: f64,
    fit_duration_hours: u32,
    storm_duration_hours: f64,
    intensity: f64,
}

impl DesignStorm {
    /// Inverts `distribution` at `return_period` and spreads the depth over
    /// `storm_duration_hours`.
    ///
    /// The depth belongs to the duration the distribution was fitted for
    /// (`fit_duration_hours`). Dividing it by a different storm duration is
    /// allowed but not rescaled; a warning is logged. A non-positive storm
    /// duration gives zero intensity.
    ///
    /// # Errors
    ///
    /// [`FrequencyError::InvalidReturnPeriod`] if `return_period < 1` or is
    /// not finite.
    pub fn derive(
        distribution: &Distribution,
        return_period: f64,
        fit_duration_hours: u32,
        storm_duration_hours: f64,
    ) -> Result<Self, FrequencyError> {
        let depth = distribution.invert(return_period)?;

        let intensity = if storm_duration_hours > 0.0 {
            depth / storm_duration_hours
        } else {
            0.0
        };

        if storm_duration_hours > 0.0
            && (storm_duration_hours - f64::from(fit_duration_hours)).abs() > 1e-9
        {
            warn!(
                fit_duration_hours,
                storm_duration_hours,
                "storm duration differs from the fitted duration; \
                 depth is not rescaled between durations"
            );
        }

        debug!(
            method = %distribution.method(),
            return_period, depth, intensity, "design storm"
        );

        Ok(Self {
            method: distribution.method(),
            return_period,
            depth,
            fit_duration_hours,
            storm_duration_hours,
            intensity,
        })
    }

    /// Distribution the depth came from.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Return period (years).
    pub fn return_period(&self) -> f64 {
        self.return_period
    }

    /// Design depth (mm) for the fitted duration.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Duration (hours) of the annual maxima that were fitted.
    pub fn fit_duration_hours(&self) -> u32 {
        self.fit_duration_hours
    }

    /// Duration (hours) the depth was spread over.
    pub fn storm_duration_hours(&self) -> f64 {
        self.storm_duration_hours
    }

    /// Design intensity (mm/h).
    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gumbel::GumbelParams;
    use approx::assert_relative_eq;

    fn dist() -> Distribution {
        Distribution::Gumbel(GumbelParams::new(30.0, 10.0).unwrap())
    }

    #[test]
    fn intensity_over_fit_duration() {
        let storm = DesignStorm::derive(&dist(), 100.0, 2, 2.0).unwrap();
        assert_relative_eq!(storm.depth(), 76.001_492, epsilon = 1e-5);
        assert_relative_eq!(storm.intensity(), 38.000_746, epsilon = 1e-5);
        assert_eq!(storm.method(), Method::Gumbel);
        assert_eq!(storm.fit_duration_hours(), 2);
    }

    #[test]
    fn different_storm_duration_keeps_depth() {
        let storm = DesignStorm::derive(&dist(), 10.0, 24, 0.5).unwrap();
        let same = DesignStorm::derive(&dist(), 10.0, 24, 24.0).unwrap();
        assert_eq!(storm.depth(), same.depth());
        assert_relative_eq!(storm.intensity(), storm.depth() / 0.5);
    }

    #[test]
    fn zero_duration_gives_zero_intensity() {
        let storm = DesignStorm::derive(&dist(), 10.0, 1, 0.0).unwrap();
        assert_eq!(storm.intensity(), 0.0);
        assert!(storm.depth() > 0.0);
    }

    #[test]
    fn invalid_return_period() {
        assert!(DesignStorm::derive(&dist(), 0.9, 1, 1.0).is_err());
    }
}
