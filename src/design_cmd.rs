//! Design command: rainfall record to sized drainage structures.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use pluvia_frequency::{IdfAnalysis, build_idf};
use pluvia_maxima::annual_maxima;

use crate::cli::DesignArgs;
use crate::config::PluviaConfig;
use crate::context::DesignContext;
use crate::convert;
use crate::record;

/// Summary printed by `pluvia design`.
#[derive(Serialize)]
struct DesignReport<'a> {
    analysis: &'a IdfAnalysis,
    design: &'a DesignContext,
}

/// Run fit, design storm, peak flow and the configured sizing stages.
pub fn run(args: DesignArgs) -> Result<()> {
    let _cmd = info_span!("design").entered();

    // 1. Load project TOML
    let config = PluviaConfig::load(&args.config)?;
    let design = config
        .design
        .as_ref()
        .context("missing [design] section: area_ha is required")?;
    let input = args.input.or_else(|| config.io.input.clone()).ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let freq_cfg = convert::build_frequency_config(&config.frequency)?;
    let duration = config.frequency.duration_hours;

    // 2. Record and maxima
    let series = record::load_series(&input, &config.io)?;
    let maxima = annual_maxima(&series, duration)
        .with_context(|| format!("failed to extract {duration} h maxima"))?;

    // 3. Frequency analysis
    let analysis = {
        let _s = info_span!("frequency").entered();
        build_idf(&maxima, &freq_cfg).context("frequency analysis failed")?
    };

    // 4. Design storm and peak flow
    let mut ctx = DesignContext::from_analysis(&analysis, design)
        .context("failed to derive design storm")?;

    // 5. Sizing
    if let Some(conduit) = &config.conduit {
        let _s = info_span!("conduit").entered();
        ctx.size_conduit(conduit).context("conduit sizing failed")?;
    }
    if let Some(channel) = &config.channel {
        let _s = info_span!("channel").entered();
        ctx.analyse_channel(channel).context("channel analysis failed")?;
    }
    info!(design_flow = ctx.design_flow, "design complete");

    let report = DesignReport {
        analysis: &analysis,
        design: &ctx,
    };
    record::write_json(&report, args.output.as_deref())
}
