//! Maxima command: annual maxima for one accumulation duration.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pluvia_maxima::annual_maxima;

use crate::cli::MaximaArgs;
use crate::config::PluviaConfig;
use crate::record;

/// Extract annual maxima and print them as JSON.
pub fn run(args: MaximaArgs) -> Result<()> {
    let _cmd = info_span!("maxima").entered();
    let config = PluviaConfig::load_or_default(args.record.config.as_deref())?;
    let series = record::load_series(&args.record.input, &config.io)?;

    let maxima = annual_maxima(&series, args.duration)
        .with_context(|| format!("failed to extract {} h maxima", args.duration))?;
    info!(
        duration_hours = args.duration,
        n_years = maxima.len(),
        "annual maxima extracted"
    );

    record::write_json(&maxima, args.output.as_deref())
}
