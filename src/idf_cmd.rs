//! IDF command: fit both distributions for one duration.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use pluvia_frequency::build_idf;
use pluvia_maxima::annual_maxima;

use crate::cli::IdfArgs;
use crate::config::PluviaConfig;
use crate::convert;
use crate::record;

/// Fit Gumbel and Log-Pearson III and print the IDF analysis as JSON.
pub fn run(args: IdfArgs) -> Result<()> {
    let _cmd = info_span!("idf").entered();
    let config = PluviaConfig::load_or_default(args.record.config.as_deref())?;
    let duration = args.duration.unwrap_or(config.frequency.duration_hours);
    let freq_cfg = convert::build_frequency_config(&config.frequency)?;

    let series = record::load_series(&args.record.input, &config.io)?;
    let maxima = annual_maxima(&series, duration)
        .with_context(|| format!("failed to extract {duration} h maxima"))?;

    let analysis = build_idf(&maxima, &freq_cfg).context("frequency analysis failed")?;

    let gof = analysis.gumbel().goodness();
    info!(
        ks = gof.ks_statistic(),
        ks_p = gof.ks_p_value(),
        ad = gof.anderson_darling().statistic(),
        "gumbel goodness of fit"
    );
    if gof.anderson_darling().rejects_at(5.0) {
        warn!("Anderson-Darling rejects the Gumbel fit at the 5% level");
    }
    match analysis.log_pearson3() {
        Some(lp3) if lp3.excluded() > 0 => warn!(
            excluded = lp3.excluded(),
            "non-positive maxima left out of the Log-Pearson III fit"
        ),
        Some(_) => {}
        None => warn!("Log-Pearson III columns are empty for this duration"),
    }

    record::write_json(&analysis, args.output.as_deref())
}
