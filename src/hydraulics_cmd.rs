//! Channel and conduit commands: direct hydraulic calculations.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info_span;

use pluvia_hydraulics::{
    ChannelDesign, Material, analyse_channel, required_base_width, size_circular_conduit,
};

use crate::cli::{ChannelArgs, ConduitArgs};
use crate::convert;
use crate::record;

#[derive(Serialize)]
struct ChannelReport {
    material: Material,
    roughness: f64,
    #[serde(flatten)]
    design: ChannelDesign,
    /// Base width carrying the flow at the requested depth.
    required_base_width: Option<f64>,
}

#[derive(Serialize)]
struct ConduitReport {
    material: Material,
    roughness: f64,
    flow: f64,
    slope: f64,
    diameter: f64,
    capacity: f64,
    velocity: f64,
}

/// Analyse a trapezoidal channel at the given flow.
pub fn run_channel(args: ChannelArgs) -> Result<()> {
    let _cmd = info_span!("channel").entered();
    let material = convert::lining_from_args(&args.lining)?;
    let n = material.roughness();

    let Some(design) = analyse_channel(args.flow, args.base_width, args.side_slope, args.slope, n)
    else {
        bail!("no normal depth found for {} m³/s in this channel", args.flow);
    };

    let width_at_depth = match args.depth {
        Some(depth) => {
            let Some(b) = required_base_width(args.flow, args.side_slope, depth, args.slope, n)
            else {
                bail!("no base width carries {} m³/s at depth {depth} m", args.flow);
            };
            Some(b)
        }
        None => None,
    };

    record::write_json(
        &ChannelReport {
            material,
            roughness: n,
            design,
            required_base_width: width_at_depth,
        },
        None,
    )
}

/// Pick the smallest adequate circular conduit.
pub fn run_conduit(args: ConduitArgs) -> Result<()> {
    let _cmd = info_span!("conduit").entered();
    let material = convert::lining_from_args(&args.lining)?;
    let n = material.roughness();

    let Some(design) =
        size_circular_conduit(args.flow, n, args.slope, args.d_min, args.d_max, args.step)
    else {
        bail!(
            "no diameter between {} m and {} m carries {} m³/s",
            args.d_min,
            args.d_max,
            args.flow
        );
    };

    record::write_json(
        &ConduitReport {
            material,
            roughness: n,
            flow: args.flow,
            slope: args.slope,
            diameter: design.diameter(),
            capacity: design.capacity(),
            velocity: design.velocity(args.flow),
        },
        None,
    )
}
