//! Inverse open-channel problems solved by bisection.
//!
//! Every solver here assumes the residual is monotone over its search range,
//! which holds for non-negative depths and widths. There is no separate
//! monotonicity check: a range that straddles a non-monotone region can
//! return a spurious root, so callers should keep to the defaults unless
//! they know the section well.

use pluvia_solver::{SolverError, bisect};
use serde::Serialize;
use tracing::debug;

use crate::error::HydraulicsError;
use crate::geometry::ChannelSection;
use crate::manning::{FlowRegime, bed_shear_stress, conveyance, froude_number};

/// Closed interval searched by an inverse solver (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchRange {
    min: f64,
    max: f64,
}

/// Default depth bracket for normal and critical depth, `[1e-4, 50]` m.
pub const DEPTH_RANGE: SearchRange = SearchRange {
    min: 1e-4,
    max: 50.0,
};

/// Default bed-width bracket, `[0.01, 50]` m.
pub const BASE_WIDTH_RANGE: SearchRange = SearchRange {
    min: 0.01,
    max: 50.0,
};

impl SearchRange {
    /// Creates a range after checking `0 <= min < max`, both finite.
    pub fn new(min: f64, max: f64) -> Result<Self, HydraulicsError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(HydraulicsError::InvalidSearchRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (m).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (m).
    pub fn max(&self) -> f64 {
        self.max
    }
}

fn solved(what: &'static str, result: Result<f64, SolverError>) -> Option<f64> {
    match result {
        Ok(x) => Some(x),
        Err(e) => {
            debug!(what, error = %e, "inverse solve failed");
            None
        }
    }
}

/// Normal depth: the depth at which Manning conveyance equals `design_flow`,
/// searched over [`DEPTH_RANGE`].
///
/// Returns `None` if the required depth lies outside the range.
pub fn normal_depth(
    design_flow: f64,
    base_width: f64,
    side_slope: f64,
    slope: f64,
    roughness: f64,
) -> Option<f64> {
    normal_depth_in(
        design_flow,
        base_width,
        side_slope,
        slope,
        roughness,
        DEPTH_RANGE,
    )
}

/// [`normal_depth`] over a caller-chosen range.
pub fn normal_depth_in(
    design_flow: f64,
    base_width: f64,
    side_slope: f64,
    slope: f64,
    roughness: f64,
    range: SearchRange,
) -> Option<f64> {
    let section = ChannelSection::new(base_width, side_slope, 0.0);
    let residual = |y: f64| {
        let s = section.with_depth(y);
        conveyance(s.area(), s.wetted_perimeter(), slope, roughness) - design_flow
    };
    solved("normal depth", bisect(residual, range.min, range.max))
}

/// Critical depth: the depth at which the Froude number equals 1, searched
/// over [`DEPTH_RANGE`].
pub fn critical_depth(design_flow: f64, base_width: f64, side_slope: f64) -> Option<f64> {
    critical_depth_in(design_flow, base_width, side_slope, DEPTH_RANGE)
}

/// [`critical_depth`] over a caller-chosen range.
pub fn critical_depth_in(
    design_flow: f64,
    base_width: f64,
    side_slope: f64,
    range: SearchRange,
) -> Option<f64> {
    let section = ChannelSection::new(base_width, side_slope, 0.0);
    let residual = |y: f64| {
        let s = section.with_depth(y);
        froude_number(design_flow, s.area(), s.top_width()) - 1.0
    };
    solved("critical depth", bisect(residual, range.min, range.max))
}

/// Bed width needed to carry `design_flow` at depth `depth`, searched over
/// [`BASE_WIDTH_RANGE`].
///
/// Not meaningful for triangular sections, whose bed width is fixed at
/// zero: the search never goes below the range minimum, so callers working
/// with triangles must not use it.
pub fn required_base_width(
    design_flow: f64,
    side_slope: f64,
    depth: f64,
    slope: f64,
    roughness: f64,
) -> Option<f64> {
    required_base_width_in(
        design_flow,
        side_slope,
        depth,
        slope,
        roughness,
        BASE_WIDTH_RANGE,
    )
}

/// [`required_base_width`] over a caller-chosen range.
pub fn required_base_width_in(
    design_flow: f64,
    side_slope: f64,
    depth: f64,
    slope: f64,
    roughness: f64,
    range: SearchRange,
) -> Option<f64> {
    let section = ChannelSection::new(0.0, side_slope, depth);
    let residual = |b: f64| {
        let s = section.with_base_width(b);
        conveyance(s.area(), s.wetted_perimeter(), slope, roughness) - design_flow
    };
    solved("base width", bisect(residual, range.min, range.max))
}

/// Uniform-flow state of an open channel carrying a design flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelDesign {
    /// Design flow (m³/s).
    pub flow: f64,
    /// Section at normal depth.
    pub section: ChannelSection,
    /// Normal depth (m).
    pub normal_depth: f64,
    /// Critical depth (m), if found.
    pub critical_depth: Option<f64>,
    /// Mean velocity at normal depth (m/s).
    pub velocity: f64,
    /// Froude number at normal depth.
    pub froude: f64,
    /// Mean bed shear stress at normal depth (Pa).
    pub shear_stress: f64,
    /// Regime, if critical depth was found.
    pub regime: Option<FlowRegime>,
}

/// Solves normal and critical depth for a trapezoidal channel and reports
/// the resulting velocity, Froude number, shear stress and regime.
///
/// Returns `None` if normal depth cannot be found.
pub fn analyse_channel(
    design_flow: f64,
    base_width: f64,
    side_slope: f64,
    slope: f64,
    roughness: f64,
) -> Option<ChannelDesign> {
    let yn = normal_depth(design_flow, base_width, side_slope, slope, roughness)?;
    let yc = critical_depth(design_flow, base_width, side_slope);
    let section = ChannelSection::new(base_width, side_slope, yn);
    let area = section.area();
    let velocity = if area > 0.0 { design_flow / area } else { 0.0 };

    Some(ChannelDesign {
        flow: design_flow,
        section,
        normal_depth: yn,
        critical_depth: yc,
        velocity,
        froude: froude_number(design_flow, area, section.top_width()),
        shear_stress: bed_shear_stress(section.hydraulic_radius(), slope),
        regime: yc.map(|yc| FlowRegime::classify(yn, yc)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use approx::assert_relative_eq;

    #[test]
    fn search_range_validation() {
        assert!(SearchRange::new(0.0, 1.0).is_ok());
        assert!(SearchRange::new(1.0, 1.0).is_err());
        assert!(SearchRange::new(-1.0, 1.0).is_err());
        assert!(SearchRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn default_ranges() {
        assert_eq!(DEPTH_RANGE.min(), 1e-4);
        assert_eq!(DEPTH_RANGE.max(), 50.0);
        assert_eq!(BASE_WIDTH_RANGE.min(), 0.01);
        assert_eq!(BASE_WIDTH_RANGE.max(), 50.0);
    }

    #[test]
    fn normal_depth_recovers_known_rectangle() {
        let q = conveyance(2.0, 4.0, 0.001, 0.013);
        let y = normal_depth(q, 2.0, 0.0, 0.001, 0.013).unwrap();
        assert_relative_eq!(y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn normal_depth_trapezoid_satisfies_manning() {
        let (b, z, s, n, q) = (1.0, 1.0, 0.001, 0.015, 1.5);
        let y = normal_depth(q, b, z, s, n).unwrap();
        let sec = ChannelSection::new(b, z, y);
        let q_back = conveyance(sec.area(), sec.wetted_perimeter(), s, n);
        assert_relative_eq!(q_back, q, epsilon = 1e-5);
    }

    #[test]
    fn normal_depth_outside_range() {
        // Needs far more than 50 m of depth in a 0.1 m wide flume.
        assert!(normal_depth(1e6, 0.1, 0.0, 1e-6, 0.07).is_none());
    }

    #[test]
    fn normal_depth_zero_slope_has_no_root() {
        assert!(normal_depth(1.0, 2.0, 1.0, 0.0, 0.013).is_none());
    }

    #[test]
    fn normal_depth_custom_range() {
        let range = SearchRange::new(1e-4, 0.5).unwrap();
        let q = conveyance(2.0, 4.0, 0.001, 0.013);
        // True depth 1.0 is outside [1e-4, 0.5].
        assert!(normal_depth_in(q, 2.0, 0.0, 0.001, 0.013, range).is_none());
    }

    #[test]
    fn critical_depth_rectangle_closed_form() {
        let (q, b) = (2.0, 2.0);
        let yc = critical_depth(q, b, 0.0).unwrap();
        let unit_q: f64 = q / b;
        let expected = (unit_q * unit_q / GRAVITY).cbrt();
        assert_relative_eq!(yc, expected, epsilon = 1e-5);
    }

    #[test]
    fn critical_depth_zero_flow() {
        assert!(critical_depth(0.0, 2.0, 1.0).is_none());
    }

    #[test]
    fn required_base_width_recovers_rectangle() {
        let q = conveyance(2.0, 4.0, 0.001, 0.013);
        let b = required_base_width(q, 0.0, 1.0, 0.001, 0.013).unwrap();
        assert_relative_eq!(b, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn required_base_width_unreachable() {
        assert!(required_base_width(1e4, 0.0, 0.1, 0.001, 0.013).is_none());
    }

    #[test]
    fn analyse_mild_channel_is_subcritical() {
        let design = analyse_channel(1.0, 2.0, 1.0, 0.0005, 0.025).unwrap();
        assert_eq!(design.regime, Some(FlowRegime::Subcritical));
        assert!(design.froude < 1.0);
        assert!(design.normal_depth > design.critical_depth.unwrap());
        assert_relative_eq!(
            design.velocity * design.section.area(),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn analyse_steep_channel_is_supercritical() {
        let design = analyse_channel(1.0, 2.0, 0.0, 0.05, 0.013).unwrap();
        assert_eq!(design.regime, Some(FlowRegime::Supercritical));
        assert!(design.froude > 1.0);
    }

    #[test]
    fn analyse_shear_stress() {
        let design = analyse_channel(1.0, 2.0, 1.0, 0.001, 0.015).unwrap();
        let expected = bed_shear_stress(design.section.hydraulic_radius(), 0.001);
        assert_relative_eq!(design.shear_stress, expected);
    }

    #[test]
    fn analyse_unsolvable() {
        assert!(analyse_channel(1.0, 2.0, 1.0, 0.0, 0.015).is_none());
    }
}
