//! Lining materials and their Manning roughness coefficients.

use std::str::FromStr;

use serde::Serialize;

use crate::error::HydraulicsError;

/// Roughness used for [`Material::Custom`] when no explicit value is given.
const DEFAULT_CUSTOM_ROUGHNESS: f64 = 0.015;

/// Channel or conduit lining, mapped to a fixed Manning `n`.
///
/// `Custom` carries a caller-supplied coefficient and is the fallback for
/// linings outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Finished concrete channel, n = 0.013.
    FinishedConcrete,
    /// Rough concrete, n = 0.017.
    RoughConcrete,
    /// Smooth PVC (open gutter), n = 0.009.
    SmoothPvc,
    /// Smoothed earth, n = 0.022.
    SmoothEarth,
    /// Average earth, n = 0.025.
    AverageEarth,
    /// Irregular earth, n = 0.030.
    IrregularEarth,
    /// Rocky or natural bank, n = 0.035.
    Rock,
    /// Light vegetation, n = 0.040.
    LightVegetation,
    /// Dense vegetation, n = 0.070.
    DenseVegetation,
    /// User-defined coefficient.
    Custom(f64),
}

impl Material {
    /// Every tabulated material, in table order, plus `Custom` at its
    /// default coefficient.
    pub const ALL: [Material; 10] = [
        Material::FinishedConcrete,
        Material::RoughConcrete,
        Material::SmoothPvc,
        Material::SmoothEarth,
        Material::AverageEarth,
        Material::IrregularEarth,
        Material::Rock,
        Material::LightVegetation,
        Material::DenseVegetation,
        Material::Custom(DEFAULT_CUSTOM_ROUGHNESS),
    ];

    /// Builds a custom material after checking the coefficient is finite
    /// and positive.
    pub fn custom(roughness: f64) -> Result<Self, HydraulicsError> {
        if roughness.is_finite() && roughness > 0.0 {
            Ok(Material::Custom(roughness))
        } else {
            Err(HydraulicsError::InvalidRoughness { value: roughness })
        }
    }

    /// Manning roughness coefficient `n`.
    pub fn roughness(&self) -> f64 {
        match self {
            Material::FinishedConcrete => 0.013,
            Material::RoughConcrete => 0.017,
            Material::SmoothPvc => 0.009,
            Material::SmoothEarth => 0.022,
            Material::AverageEarth => 0.025,
            Material::IrregularEarth => 0.030,
            Material::Rock => 0.035,
            Material::LightVegetation => 0.040,
            Material::DenseVegetation => 0.070,
            Material::Custom(n) => *n,
        }
    }

    /// Machine name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Material::FinishedConcrete => "finished_concrete",
            Material::RoughConcrete => "rough_concrete",
            Material::SmoothPvc => "smooth_pvc",
            Material::SmoothEarth => "smooth_earth",
            Material::AverageEarth => "average_earth",
            Material::IrregularEarth => "irregular_earth",
            Material::Rock => "rock",
            Material::LightVegetation => "light_vegetation",
            Material::DenseVegetation => "dense_vegetation",
            Material::Custom(_) => "custom",
        }
    }
}

impl FromStr for Material {
    type Err = HydraulicsError;

    /// Parses a machine name (case-insensitive, `-` or `_`). `custom` maps
    /// to the default custom coefficient.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Material::ALL
            .iter()
            .find(|m| m.name() == key)
            .copied()
            .ok_or_else(|| HydraulicsError::UnknownMaterial {
                name: s.to_string(),
            })
    }
}
