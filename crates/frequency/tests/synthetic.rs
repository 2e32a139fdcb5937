//! Fits against samples drawn from known distributions.

use approx::assert_relative_eq;
use chrono::{NaiveDate, TimeDelta};
use pluvia_frequency::{
    DesignStorm, FrequencyConfig, GumbelFit, LogPearson3Fit, Method, build_idf,
};
use pluvia_maxima::{AnnualMaxima, RainfallSeries, annual_maxima};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution as _, Exp, Gumbel, LogNormal};

#[test]
fn gumbel_mle_recovers_parameters() {
    let mut rng = StdRng::seed_from_u64(7);
    let dist = Gumbel::new(40.0, 12.0).unwrap();
    let sample: Vec<f64> = (0..3000).map(|_| dist.sample(&mut rng)).collect();

    let fit = GumbelFit::from_sample(&sample).unwrap();
    assert_relative_eq!(fit.params().location(), 40.0, max_relative = 0.03);
    assert_relative_eq!(fit.params().scale(), 12.0, max_relative = 0.05);
    assert!(
        fit.goodness().ks_p_value() > 0.01,
        "KS rejects a sample from the fitted family"
    );
    assert!(!fit.goodness().anderson_darling().rejects_at(1.0));
}

#[test]
fn two_year_depth_near_sample_median() {
    let mut rng = StdRng::seed_from_u64(11);
    let dist = Gumbel::new(60.0, 15.0).unwrap();
    let values: Vec<f64> = (0..1500).map(|_| dist.sample(&mut rng)).collect();
    let maxima = AnnualMaxima::from_pairs(24, (1..).zip(values.iter().copied()));

    let analysis = build_idf(&maxima, &FrequencyConfig::new()).unwrap();
    let ordered = pluvia_stats::sorted(&values);
    let median = (ordered[749] + ordered[750]) / 2.0;
    let row = analysis.table().row(2.0).unwrap();
    assert_relative_eq!(row.gumbel_depth, median, max_relative = 0.03);
    assert_relative_eq!(row.lp3_depth.unwrap(), median, max_relative = 0.05);
}

#[test]
fn lp3_on_lognormal_sample_matches_lognormal_quantile() {
    let mut rng = StdRng::seed_from_u64(3);
    let (mu, sigma) = (3.5, 0.3);
    let dist = LogNormal::new(mu, sigma).unwrap();
    let sample: Vec<f64> = (0..4000).map(|_| dist.sample(&mut rng)).collect();

    let fit = LogPearson3Fit::from_sample(&sample).unwrap();
    assert!(fit.params().skew().abs() < 0.15);
    assert_relative_eq!(
        fit.params().std_log(),
        sigma / std::f64::consts::LN_10,
        max_relative = 0.05
    );

    let expected = (mu + 2.326_347_9 * sigma).exp();
    let q100 = fit.params().inverse_cdf(0.99).unwrap();
    assert_relative_eq!(q100, expected, max_relative = 0.05);
}

#[test]
fn hourly_record_to_design_storm() {
    let mut rng = StdRng::seed_from_u64(2024);
    let wet = Exp::new(0.4).unwrap();
    let t0 = NaiveDate::from_ymd_opt(1995, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let n_hours = 20 * 365 * 24;
    let times = (0..n_hours).map(|h| t0 + TimeDelta::hours(h)).collect();
    let depths = (0..n_hours)
        .map(|h| if h % 37 < 3 { wet.sample(&mut rng) } else { 0.0 })
        .collect();
    let series = RainfallSeries::new(times, depths).unwrap();

    let maxima = annual_maxima(&series, 3).unwrap();
    assert!(maxima.len() >= 20);

    let analysis = build_idf(&maxima, &FrequencyConfig::new()).unwrap();
    for method in Method::ALL {
        let storm = DesignStorm::derive(&analysis.fit_for(method).unwrap(), 10.0, 3, 3.0).unwrap();
        let row = analysis.table().row(10.0).unwrap();
        assert_relative_eq!(storm.intensity(), row.intensity(method).unwrap(), epsilon = 1e-12);
        assert!(storm.depth() > 0.0);
    }
}
