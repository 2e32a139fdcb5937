//! State carried between the stages of the `design` pipeline.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{info, warn};

use pluvia_frequency::{DesignStorm, Distribution, IdfAnalysis, Method};
use pluvia_hydraulics::{
    ChannelDesign, ConduitDesign, Material, analyse_channel, size_circular_conduit,
};
use pluvia_runoff::{ConcentrationMethod, rational_flow};

use crate::config::{ChannelToml, ConduitToml, DesignToml};
use crate::convert;

/// Time of concentration with the inputs it came from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Concentration {
    pub inputs: ConcentrationMethod,
    pub time_minutes: f64,
}

/// Selected conduit with the lining and slope it was sized for.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConduitSizing {
    pub material: Material,
    pub roughness: f64,
    pub slope: f64,
    pub design: ConduitDesign,
    pub velocity: f64,
}

/// Channel analysis with the lining it was run for.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChannelAnalysis {
    pub material: Material,
    pub roughness: f64,
    pub design: ChannelDesign,
}

/// Everything the pipeline has derived so far.
///
/// Filled stage by stage: fit, design storm, concentration time and peak
/// flow first, then the optional conduit and channel sizing.
#[derive(Debug, Clone, Serialize)]
pub struct DesignContext {
    pub distribution: Distribution,
    pub storm: DesignStorm,
    pub concentration: Option<Concentration>,
    pub runoff_coefficient: f64,
    pub area_ha: f64,
    /// Peak flow from the Rational Method (m³/s).
    pub design_flow: f64,
    pub conduit: Option<ConduitSizing>,
    pub channel: Option<ChannelAnalysis>,
}

impl DesignContext {
    /// Design storm and peak flow from a fitted IDF analysis.
    ///
    /// The storm duration is the configured one, else the concentration
    /// time when a method is configured, else the fitted duration.
    pub fn from_analysis(analysis: &IdfAnalysis, design: &DesignToml) -> Result<Self> {
        let method: Method = convert::parse_method(&design.method)?;
        let Some(distribution) = analysis.fit_for(method) else {
            bail!("{method} fit is unavailable for this record");
        };
        let fit_duration = analysis.duration_hours();

        let concentration = design
            .concentration
            .as_ref()
            .map(|tc| -> Result<Concentration> {
                let inputs = convert::build_concentration(tc)?;
                Ok(Concentration {
                    inputs,
                    time_minutes: inputs.time_minutes(),
                })
            })
            .transpose()?;

        let storm_duration = match (design.storm_duration_hours, concentration) {
            (Some(h), _) => h,
            (None, Some(tc)) if tc.time_minutes > 0.0 => tc.time_minutes / 60.0,
            _ => f64::from(fit_duration),
        };

        let storm = DesignStorm::derive(
            &distribution,
            design.return_period,
            fit_duration,
            storm_duration,
        )?;

        let design_flow =
            rational_flow(design.runoff_coefficient, storm.intensity(), design.area_ha);
        if design_flow <= 0.0 {
            warn!(
                runoff_coefficient = design.runoff_coefficient,
                intensity = storm.intensity(),
                area_ha = design.area_ha,
                "design flow is zero; sizing stages will be skipped"
            );
        }
        info!(
            method = %method,
            return_period = design.return_period,
            depth = storm.depth(),
            intensity = storm.intensity(),
            design_flow,
            "design storm derived"
        );

        Ok(Self {
            distribution,
            storm,
            concentration,
            runoff_coefficient: design.runoff_coefficient,
            area_ha: design.area_ha,
            design_flow,
            conduit: None,
            channel: None,
        })
    }

    /// Sizes a circular conduit for the design flow.
    ///
    /// Leaves `conduit` empty when there is no positive flow to carry.
    pub fn size_conduit(&mut self, cfg: &ConduitToml) -> Result<()> {
        if self.design_flow <= 0.0 {
            warn!(design_flow = self.design_flow, "conduit not computable without flow");
            self.conduit = None;
            return Ok(());
        }
        let material = convert::parse_lining(cfg.material.as_deref(), cfg.roughness)?;
        let n = material.roughness();
        let Some(design) =
            size_circular_conduit(self.design_flow, n, cfg.slope, cfg.d_min, cfg.d_max, cfg.step)
        else {
            bail!(
                "no conduit between {} m and {} m carries {:.4} m³/s at slope {}",
                cfg.d_min,
                cfg.d_max,
                self.design_flow,
                cfg.slope
            );
        };
        info!(diameter = design.diameter(), capacity = design.capacity(), "conduit sized");
        self.conduit = Some(ConduitSizing {
            material,
            roughness: n,
            slope: cfg.slope,
            design,
            velocity: design.velocity(self.design_flow),
        });
        Ok(())
    }

    /// Runs the uniform-flow analysis of the configured channel.
    ///
    /// Leaves `channel` empty when there is no positive flow.
    pub fn analyse_channel(&mut self, cfg: &ChannelToml) -> Result<()> {
        if self.design_flow <= 0.0 {
            warn!(design_flow = self.design_flow, "channel not computable without flow");
            self.channel = None;
            return Ok(());
        }
        let material = convert::parse_lining(cfg.material.as_deref(), cfg.roughness)?;
        let n = material.roughness();
        let Some(design) =
            analyse_channel(self.design_flow, cfg.base_width, cfg.side_slope, cfg.slope, n)
        else {
            bail!(
                "no normal depth found for {:.4} m³/s in the configured channel",
                self.design_flow
            );
        };
        info!(
            normal_depth = design.normal_depth,
            velocity = design.velocity,
            "channel analysed"
        );
        self.channel = Some(ChannelAnalysis {
            material,
            roughness: n,
            design,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConcentrationToml;
    use pluvia_frequency::{FrequencyConfig, build_idf};
    use pluvia_maxima::AnnualMaxima;

    fn analysis() -> IdfAnalysis {
        let depths = [42.0, 55.3, 38.1, 61.7, 47.2, 70.4, 44.9, 52.8, 58.6, 49.5];
        let maxima = AnnualMaxima::from_pairs(24, (2000..).zip(depths));
        build_idf(&maxima, &FrequencyConfig::default()).unwrap()
    }

    fn design() -> DesignToml {
        toml::from_str("area_ha = 10.0").unwrap()
    }

    fn conduit() -> ConduitToml {
        ConduitToml {
            material: Some("finished_concrete".to_string()),
            roughness: None,
            slope: 0.005,
            d_min: 0.05,
            d_max: 3.0,
            step: 0.01,
        }
    }

    #[test]
    fn storm_spread_over_fit_duration_by_default() {
        let ctx = DesignContext::from_analysis(&analysis(), &design()).unwrap();
        assert_eq!(ctx.storm.storm_duration_hours(), 24.0);
        let expected = 0.6 * ctx.storm.intensity() * 10.0 / 360.0;
        assert!((ctx.design_flow - expected).abs() < 1e-12);
    }

    #[test]
    fn storm_duration_from_concentration_time() {
        let mut d = design();
        d.concentration = Some(ConcentrationToml {
            method: "kirpich".to_string(),
            length_m: Some(1000.0),
            slope: Some(0.01),
            area_km2: None,
            length_km: None,
            max_elevation_m: None,
            min_elevation_m: None,
        });
        let ctx = DesignContext::from_analysis(&analysis(), &d).unwrap();
        let tc = ctx.concentration.unwrap();
        assert!((ctx.storm.storm_duration_hours() - tc.time_minutes / 60.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_storm_duration_wins() {
        let mut d = design();
        d.storm_duration_hours = Some(2.0);
        let ctx = DesignContext::from_analysis(&analysis(), &d).unwrap();
        assert_eq!(ctx.storm.storm_duration_hours(), 2.0);
    }

    #[test]
    fn conduit_stage_records_sizing() {
        let mut ctx = DesignContext::from_analysis(&analysis(), &design()).unwrap();
        ctx.size_conduit(&conduit()).unwrap();
        let c = ctx.conduit.unwrap();
        assert!(c.design.capacity() >= ctx.design_flow);
        assert_eq!(c.roughness, 0.013);
    }

    #[test]
    fn undersized_conduit_range_is_an_error() {
        let mut ctx = DesignContext::from_analysis(&analysis(), &design()).unwrap();
        let cfg = ConduitToml {
            material: None,
            roughness: Some(0.013),
            slope: 0.005,
            d_min: 0.01,
            d_max: 0.02,
            step: 0.01,
        };
        assert!(ctx.size_conduit(&cfg).is_err());
        assert!(ctx.conduit.is_none());
    }

    #[test]
    fn zero_flow_sizes_nothing() {
        let mut d = design();
        d.area_ha = 0.0;
        let mut ctx = DesignContext::from_analysis(&analysis(), &d).unwrap();
        assert_eq!(ctx.design_flow, 0.0);

        ctx.size_conduit(&conduit()).unwrap();
        assert!(ctx.conduit.is_none());

        let channel = ChannelToml {
            material: Some("average_earth".to_string()),
            roughness: None,
            base_width: 1.5,
            side_slope: 1.0,
            slope: 0.002,
        };
        ctx.analyse_channel(&channel).unwrap();
        assert!(ctx.channel.is_none());
    }

    #[test]
    fn missing_fit_is_an_error() {
        let depths = [0.0, 0.0, 42.0, 55.3, 38.1, 61.7];
        let maxima = AnnualMaxima::from_pairs(24, (2000..).zip(depths));
        let analysis = build_idf(&maxima, &FrequencyConfig::default()).unwrap();
        assert!(analysis.log_pearson3().is_none());

        let mut d = design();
        d.method = "lp3".to_string();
        assert!(DesignContext::from_analysis(&analysis, &d).is_err());
        d.method = "gumbel".to_string();
        assert!(DesignContext::from_analysis(&analysis, &d).is_ok());
    }
}
