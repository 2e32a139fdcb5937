//! Totals command: calendar-period rainfall totals.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pluvia_maxima::{Period, period_totals};

use crate::cli::TotalsArgs;
use crate::config::PluviaConfig;
use crate::record;

/// Aggregate the record by calendar period and print the totals as JSON.
pub fn run(args: TotalsArgs) -> Result<()> {
    let _cmd = info_span!("totals").entered();
    let period: Period = args
        .period
        .parse()
        .with_context(|| format!("invalid --period {:?}", args.period))?;
    let config = PluviaConfig::load_or_default(args.record.config.as_deref())?;
    let series = record::load_series(&args.record.input, &config.io)?;

    let totals = period_totals(&series, period);
    let gaps = totals.iter().filter(|t| t.samples == 0).count();
    info!(%period, n_periods = totals.len(), gaps, "totals computed");

    record::write_json(&totals, args.output.as_deref())
}
