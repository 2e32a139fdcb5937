//! Rational Method peak flow.

/// Unit conversion: (mm/h · ha) → m³/s.
pub const RATIONAL_UNIT_FACTOR: f64 = 360.0;

/// Peak flow `Q = C · i · A / 360` (m³/s).
///
/// `runoff_coefficient` is dimensionless, `intensity` in mm/h and `area` in
/// hectares. Returns 0 if any input is non-positive.
pub fn rational_flow(runoff_coefficient: f64, intensity: f64, area: f64) -> f64 {
    if runoff_coefficient <= 0.0 || intensity <= 0.0 || area <= 0.0 {
        return 0.0;
    }
    runoff_coefficient * intensity * area / RATIONAL_UNIT_FACTOR
}
