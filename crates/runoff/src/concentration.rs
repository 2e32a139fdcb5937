//! Time of concentration.
//!
//! Both formulas return minutes and 0 for any non-positive input.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::RunoffError;

/// Kirpich: `tc = 0.0195 · L^0.77 · S^−0.385` (min).
///
/// `length` is the main flow path (m), `slope` its mean gradient (m/m).
pub fn kirpich_time(length: f64, slope: f64) -> f64 {
    if length <= 0.0 || slope <= 0.0 {
        return 0.0;
    }
    0.0195 * length.powf(0.77) * slope.powf(-0.385)
}

/// Giandotti, linear-area form: `tc = (4·A + 1.5·L) / (0.8·ΔH) · 60` (min).
///
/// `area` in km², `length` in km, `relief` (ΔH) in m.
pub fn giandotti_time(area: f64, length: f64, relief: f64) -> f64 {
    if area <= 0.0 || length <= 0.0 || relief <= 0.0 {
        return 0.0;
    }
    (4.0 * area + 1.5 * length) / (0.8 * relief) * 60.0
}

/// A time-of-concentration method with its catchment inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ConcentrationMethod {
    /// Kirpich, for small steep catchments.
    Kirpich {
        /// Flow path length (m).
        length_m: f64,
        /// Mean slope (m/m).
        slope: f64,
    },
    /// Giandotti, for larger rural catchments.
    Giandotti {
        /// Catchment area (km²).
        area_km2: f64,
        /// Main channel length (km).
        length_km: f64,
        /// Elevation difference (m).
        relief_m: f64,
    },
}

impl ConcentrationMethod {
    /// Giandotti inputs from the highest and lowest catchment elevations.
    ///
    /// # Errors
    ///
    /// [`RunoffError::InvalidRelief`] if `max_elevation <= min_elevation`.
    pub fn giandotti_from_elevations(
        area_km2: f64,
        length_km: f64,
        max_elevation: f64,
        min_elevation: f64,
    ) -> Result<Self, RunoffError> {
        if max_elevation <= min_elevation {
            return Err(RunoffError::InvalidRelief {
                max: max_elevation,
                min: min_elevation,
            });
        }
        Ok(ConcentrationMethod::Giandotti {
            area_km2,
            length_km,
            relief_m: max_elevation - min_elevation,
        })
    }

    /// Short method name.
    pub fn name(&self) -> &'static str {
        match self {
            ConcentrationMethod::Kirpich { .. } => "kirpich",
            ConcentrationMethod::Giandotti { .. } => "giandotti",
        }
    }

    /// Time of concentration (min).
    pub fn time_minutes(&self) -> f64 {
        let tc = match *self {
            ConcentrationMethod::Kirpich { length_m, slope } => kirpich_time(length_m, slope),
            ConcentrationMethod::Giandotti {
                area_km2,
                length_km,
                relief_m,
            } => giandotti_time(area_km2, length_km, relief_m),
        };
        debug!(method = self.name(), tc_min = tc, "time of concentration");
        tc
    }

    /// Time of concentration (h).
    pub fn time_hours(&self) -> f64 {
        self.time_minutes() / 60.0
    }
}

/// Method name without inputs, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcentrationKind {
    /// Kirpich.
    Kirpich,
    /// Giandotti.
    Giandotti,
}

impl fmt::Display for ConcentrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConcentrationKind::Kirpich => "kirpich",
            ConcentrationKind::Giandotti => "giandotti",
        })
    }
}

impl FromStr for ConcentrationKind {
    type Err = RunoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kirpich" => Ok(ConcentrationKind::Kirpich),
            "giandotti" => Ok(ConcentrationKind::Giandotti),
            _ => Err(RunoffError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kirpich_reference() {
        assert_relative_eq!(kirpich_time(1000.0, 0.01), 23.444_156, epsilon = 1e-5);
        assert_relative_eq!(kirpich_time(500.0, 0.02), 10.527_978, epsilon = 1e-5);
    }

    #[test]
    fn kirpich_non_positive() {
        assert_eq!(kirpich_time(0.0, 0.01), 0.0);
        assert_eq!(kirpich_time(100.0, 0.0), 0.0);
    }

    #[test]
    fn kirpich_faster_on_steeper_slope() {
        assert!(kirpich_time(800.0, 0.05) < kirpich_time(800.0, 0.01));
    }

    #[test]
    fn giandotti_reference() {
        // (4·10 + 1.5·5) / (0.8·100) · 60
        assert_relative_eq!(giandotti_time(10.0, 5.0, 100.0), 35.625, epsilon = 1e-12);
    }

    #[test]
    fn giandotti_non_positive() {
        assert_eq!(giandotti_time(0.0, 5.0, 100.0), 0.0);
        assert_eq!(giandotti_time(10.0, -1.0, 100.0), 0.0);
        assert_eq!(giandotti_time(10.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn giandotti_elevations() {
        let g = ConcentrationMethod::giandotti_from_elevations(10.0, 5.0, 200.0, 100.0).unwrap();
        assert_relative_eq!(g.time_minutes(), 35.625);
        assert!(ConcentrationMethod::giandotti_from_elevations(10.0, 5.0, 100.0, 100.0).is_err());
    }

    #[test]
    fn method_dispatch() {
        let k = ConcentrationMethod::Kirpich {
            length_m: 1000.0,
            slope: 0.01,
        };
        assert_relative_eq!(k.time_minutes(), kirpich_time(1000.0, 0.01));
        assert_relative_eq!(k.time_hours(), kirpich_time(1000.0, 0.01) / 60.0);

        let g = ConcentrationMethod::giandotti_from_elevations(10.0, 5.0, 150.0, 50.0).unwrap();
        assert_relative_eq!(g.time_minutes(), 35.625);
        assert_eq!(g.name(), "giandotti");
    }

    #[test]
    fn method_rejects_flat_catchment() {
        assert_eq!(
            ConcentrationMethod::giandotti_from_elevations(1.0, 1.0, 10.0, 20.0),
            Err(RunoffError::InvalidRelief {
                max: 10.0,
                min: 20.0
            })
        );
    }

    #[test]
    fn kind_from_str() {
        assert_eq!(
            "Kirpich".parse::<ConcentrationKind>().unwrap(),
            ConcentrationKind::Kirpich
        );
        assert_eq!(
            " giandotti ".parse::<ConcentrationKind>().unwrap(),
            ConcentrationKind::Giandotti
        );
        assert!("scs".parse::<ConcentrationKind>().is_err());
        assert_eq!(ConcentrationKind::Giandotti.to_string(), "giandotti");
    }
}
