//! Physical constants (SI units).

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Density of water (kg/m³).
pub const WATER_DENSITY: f64 = 1000.0;
