//! Cross-section geometry.

use std::f64::consts::PI;

use serde::Serialize;

/// Trapezoidal channel cross-section at a given flow depth.
///
/// `side_slope` is horizontal : vertical. The section is rectangular when
/// `side_slope == 0` and triangular when `base_width == 0`. All derived
/// quantities are computed on demand from the `(b, z, y)` triple.
///
/// A non-positive depth is a dry channel, not an error: area is 0 and the
/// wetted perimeter and top width collapse to the bed width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelSection {
    base_width: f64,
    side_slope: f64,
    depth: f64,
}

impl ChannelSection {
    /// Creates a section with bed width `b`, side slope `z` and depth `y`.
    pub fn new(base_width: f64, side_slope: f64, depth: f64) -> Self {
        Self {
            base_width,
            side_slope,
            depth,
        }
    }

    /// Returns the same section at another depth.
    pub fn with_depth(self, depth: f64) -> Self {
        Self { depth, ..self }
    }

    /// Returns the same section with another bed width.
    pub fn with_base_width(self, base_width: f64) -> Self {
        Self { base_width, ..self }
    }

    /// Bed width `b` (m).
    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Side slope `z` (H:V).
    pub fn side_slope(&self) -> f64 {
        self.side_slope
    }

    /// Flow depth `y` (m).
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Flow area `A = y (b + z y)` (m²).
    pub fn area(&self) -> f64 {
        if self.depth <= 0.0 {
            return 0.0;
        }
        self.depth * (self.base_width + self.side_slope * self.depth)
    }

    /// Wetted perimeter `P = b + 2 y sqrt(1 + z²)` (m).
    pub fn wetted_perimeter(&self) -> f64 {
        if self.depth <= 0.0 {
            return self.base_width.max(0.0);
        }
        self.base_width + 2.0 * self.depth * (1.0 + self.side_slope * self.side_slope).sqrt()
    }

    /// Free-surface width `T = b + 2 z y` (m).
    pub fn top_width(&self) -> f64 {
        if self.depth <= 0.0 {
            return self.base_width.max(0.0);
        }
        self.base_width + 2.0 * self.side_slope * self.depth
    }

    /// Hydraulic radius `R = A / P` (m). 0 when the perimeter vanishes.
    pub fn hydraulic_radius(&self) -> f64 {
        let p = self.wetted_perimeter();
        if p <= 0.0 {
            return 0.0;
        }
        self.area() / p
    }

    /// Hydraulic depth `D = A / T` (m). 0 when the top width vanishes.
    pub fn hydraulic_depth(&self) -> f64 {
        let t = self.top_width();
        if t <= 0.0 {
            return 0.0;
        }
        self.area() / t
    }

    /// Manning capacity (m³/s) of the section flowing at its current depth.
    pub fn capacity(&self, slope: f64, roughness: f64) -> f64 {
        crate::manning::conveyance(self.area(), self.wetted_perimeter(), slope, roughness)
    }
}

/// Flow area of a circular conduit running full, `π d² / 4` (m²).
pub fn circular_full_area(diameter: f64) -> f64 {
    if diameter <= 0.0 {
        return 0.0;
    }
    PI / 4.0 * diameter * diameter
}

/// Hydraulic radius of a circular conduit running full, `d / 4` (m).
pub fn circular_full_hydraulic_radius(diameter: f64) -> f64 {
    if diameter <= 0.0 {
        return 0.0;
    }
    diameter / 4.0
}
