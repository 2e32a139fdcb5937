//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::cli::LiningArgs;
use crate::config::*;

use pluvia_frequency::{FrequencyConfig, Method};
use pluvia_hydraulics::Material;
use pluvia_io::ReaderConfig;
use pluvia_runoff::{ConcentrationKind, ConcentrationMethod};

/// Builds a [`ReaderConfig`] from the TOML I/O section.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_depth_column(&io.depth_column)
        .with_datetime_column(&io.datetime_column)
        .with_date_column(&io.date_column)
        .with_time_column(&io.time_column)
        .with_delimiter(io.delimiter);
    cfg.validate().context("invalid [io] section")?;
    Ok(cfg)
}

/// Builds a [`FrequencyConfig`] from the TOML frequency section.
pub fn build_frequency_config(f: &FrequencyToml) -> Result<FrequencyConfig> {
    let cfg = FrequencyConfig::new()
        .with_return_periods(f.return_periods.clone())
        .with_min_sample_size(f.min_sample_size);
    cfg.validate().context("invalid [frequency] section")?;
    Ok(cfg)
}

/// Parses the design distribution name.
pub fn parse_method(s: &str) -> Result<Method> {
    s.parse::<Method>()
        .with_context(|| format!("invalid [design].method {s:?}"))
}

/// Resolves a lining: an explicit roughness overrides the material name.
///
/// With neither set the lining defaults to finished concrete.
pub fn parse_lining(material: Option<&str>, roughness: Option<f64>) -> Result<Material> {
    match (roughness, material) {
        (Some(n), _) => Ok(Material::custom(n)?),
        (None, Some(name)) => Ok(name.parse::<Material>()?),
        (None, None) => Ok(Material::FinishedConcrete),
    }
}

/// Resolves the lining given on the command line.
pub fn lining_from_args(args: &LiningArgs) -> Result<Material> {
    parse_lining(args.material.as_deref(), args.roughness)
}

/// Converts the concentration section into a [`ConcentrationMethod`].
///
/// Giandotti relief comes from the elevation pair and must be positive.
pub fn build_concentration(tc: &ConcentrationToml) -> Result<ConcentrationMethod> {
    let kind: ConcentrationKind = tc.method.parse()?;
    let required = |value: Option<f64>, name: &str| -> Result<f64> {
        match value {
            Some(v) => Ok(v),
            None => bail!("[design.concentration] method {kind} requires {name}"),
        }
    };
    match kind {
        ConcentrationKind::Kirpich => Ok(ConcentrationMethod::Kirpich {
            length_m: required(tc.length_m, "length_m")?,
            slope: required(tc.slope, "slope")?,
        }),
        ConcentrationKind::Giandotti => Ok(ConcentrationMethod::giandotti_from_elevations(
            required(tc.area_km2, "area_km2")?,
            required(tc.length_km, "length_km")?,
            required(tc.max_elevation_m, "max_elevation_m")?,
            required(tc.min_elevation_m, "min_elevation_m")?,
        )?),
    }
}
