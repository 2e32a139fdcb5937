//! Manning equation and derived flow quantities.

use serde::Serialize;

use crate::constants::{GRAVITY, WATER_DENSITY};
use crate::geometry::{circular_full_area, circular_full_hydraulic_radius};

/// Discharge from the Manning equation,
/// `Q = (1/n) A R^(2/3) S^(1/2)` with `R = A / P` (m³/s).
///
/// Returns 0.0 when `perimeter`, `slope` or `roughness` is not positive.
/// A zero result therefore means "no flow computable", not necessarily a
/// dry section.
pub fn conveyance(area: f64, perimeter: f64, slope: f64, roughness: f64) -> f64 {
    if perimeter <= 0.0 || slope <= 0.0 || roughness <= 0.0 {
        return 0.0;
    }
    let r = area / perimeter;
    (1.0 / roughness) * area * r.powf(2.0 / 3.0) * slope.sqrt()
}

/// Froude number `V / sqrt(g D)` with `V = Q / A` and `D = A / T`.
///
/// Returns `NaN` if `area <= 0` or `top_width <= 0`, and `+inf` if the wave
/// celerity evaluates to exactly zero.
pub fn froude_number(flow: f64, area: f64, top_width: f64) -> f64 {
    if area <= 0.0 || top_width <= 0.0 {
        return f64::NAN;
    }
    let velocity = flow / area;
    let hydraulic_depth = area / top_width;
    let celerity = (GRAVITY * hydraulic_depth).sqrt();
    if celerity > 0.0 {
        velocity / celerity
    } else {
        f64::INFINITY
    }
}

/// Mean bed shear stress `τ = ρ g R S` (Pa). 0 when `R <= 0`.
pub fn bed_shear_stress(hydraulic_radius: f64, slope: f64) -> f64 {
    if hydraulic_radius <= 0.0 {
        return 0.0;
    }
    WATER_DENSITY * GRAVITY * hydraulic_radius * slope
}

/// Capacity of a circular conduit flowing full (m³/s).
///
/// Returns 0.0 if any input is not positive.
pub fn full_circular_capacity(diameter: f64, roughness: f64, slope: f64) -> f64 {
    if diameter <= 0.0 || roughness <= 0.0 || slope <= 0.0 {
        return 0.0;
    }
    let area = circular_full_area(diameter);
    let r = circular_full_hydraulic_radius(diameter);
    (1.0 / roughness) * area * r.powf(2.0 / 3.0) * slope.sqrt()
}

/// Flow regime of a channel at normal depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    /// Normal depth above critical depth (Fr < 1).
    Subcritical,
    /// Normal depth at or below critical depth (Fr >= 1).
    Supercritical,
}

impl FlowRegime {
    /// Classifies the regime from normal and critical depths.
    ///
    /// Strictly deeper than critical is subcritical; everything else,
    /// including equality, is supercritical.
    pub fn classify(normal_depth: f64, critical_depth: f64) -> Self {
        if normal_depth > critical_depth {
            FlowRegime::Subcritical
        } else {
            FlowRegime::Supercritical
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FlowRegime::Subcritical => "subcritical",
            FlowRegime::Supercritical => "supercritical",
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
