use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level project file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PluviaConfig {
    /// CSV input settings.
    #[serde(default)]
    pub io: IoToml,

    /// Frequency analysis settings.
    #[serde(default)]
    pub frequency: FrequencyToml,

    /// Design storm and runoff settings; the `design` command needs it.
    #[serde(default)]
    pub design: Option<DesignToml>,

    /// Conduit sizing; skipped when absent.
    #[serde(default)]
    pub conduit: Option<ConduitToml>,

    /// Channel analysis; skipped when absent.
    #[serde(default)]
    pub channel: Option<ChannelToml>,
}

impl PluviaConfig {
    /// Reads and parses a project file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Parses the file at `path` if given, otherwise all defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_depth_column")]
    pub depth_column: String,
    #[serde(default = "default_datetime_column")]
    pub datetime_column: String,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default)]
    pub delimiter: Option<char>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            depth_column: default_depth_column(),
            datetime_column: default_datetime_column(),
            date_column: default_date_column(),
            time_column: default_time_column(),
            delimiter: None,
        }
    }
}

fn default_depth_column() -> String {
    "precipitacao".to_string()
}
fn default_datetime_column() -> String {
    "datahora".to_string()
}
fn default_date_column() -> String {
    "data".to_string()
}
fn default_time_column() -> String {
    "hora".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyToml {
    #[serde(default = "default_duration_hours")]
    pub duration_hours: u32,
    #[serde(default = "default_return_periods")]
    pub return_periods: Vec<f64>,
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: usize,
}

impl Default for FrequencyToml {
    fn default() -> Self {
        Self {
            duration_hours: default_duration_hours(),
            return_periods: default_return_periods(),
            min_sample_size: default_min_sample_size(),
        }
    }
}

fn default_duration_hours() -> u32 {
    24
}
fn default_return_periods() -> Vec<f64> {
    vec![2.0, 5.0, 10.0, 25.0, 50.0, 100.0]
}
fn default_min_sample_size() -> usize {
    pluvia_frequency::MIN_SAMPLE_SIZE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_return_period")]
    pub return_period: f64,
    /// Duration the design depth is spread over; falls back to the
    /// concentration time, then to the fitted duration.
    #[serde(default)]
    pub storm_duration_hours: Option<f64>,
    #[serde(default = "default_runoff_coefficient")]
    pub runoff_coefficient: f64,
    /// Catchment area (ha). Required: there is no sensible default.
    pub area_ha: f64,
    #[serde(default)]
    pub concentration: Option<ConcentrationToml>,
}

fn default_method() -> String {
    "gumbel".to_string()
}
fn default_return_period() -> f64 {
    25.0
}
fn default_runoff_coefficient() -> f64 {
    0.6
}

/// Time-of-concentration inputs. Which fields are required depends on
/// `method`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConcentrationToml {
    pub method: String,
    /// Kirpich flow path length (m).
    pub length_m: Option<f64>,
    /// Kirpich mean slope (m/m).
    pub slope: Option<f64>,
    /// Giandotti catchment area (km²).
    pub area_km2: Option<f64>,
    /// Giandotti main channel length (km).
    pub length_km: Option<f64>,
    pub max_elevation_m: Option<f64>,
    pub min_elevation_m: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConduitToml {
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub roughness: Option<f64>,
    pub slope: f64,
    #[serde(default = "default_d_min")]
    pub d_min: f64,
    #[serde(default = "default_d_max")]
    pub d_max: f64,
    #[serde(default = "default_d_step")]
    pub step: f64,
}

fn default_d_min() -> f64 {
    0.05
}
fn default_d_max() -> f64 {
    3.0
}
fn default_d_step() -> f64 {
    0.01
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelToml {
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub roughness: Option<f64>,
    pub base_width: f64,
    #[serde(default)]
    pub side_slope: f64,
    pub slope: f64,
}
