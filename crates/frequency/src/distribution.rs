//! Distribution selection and inversion at a return period.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FrequencyError;
use crate::gumbel::GumbelParams;
use crate::pearson::LogPearson3Params;

/// Which fitted distribution a calculation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Gumbel (EV1).
    Gumbel,
    /// Log-Pearson type III.
    LogPearson3,
}

impl Method {
    /// All methods, in table column order.
    pub const ALL: [Method; 2] = [Method::Gumbel, Method::LogPearson3];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Gumbel => "Gumbel",
            Method::LogPearson3 => "Log-Pearson III",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = FrequencyError;

    /// Accepts `gumbel`, `lp3`, `log-pearson3`, `log_pearson_iii`, ...
    /// Case, spaces, dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "gumbel" | "ev1" => Ok(Method::Gumbel),
            "lp3" | "logpearson3" | "logpearsoniii" => Ok(Method::LogPearson3),
            _ => Err(FrequencyError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Fitted parameters of either distribution.
///
/// Inversion needs only the parameters, never the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum Distribution {
    /// Gumbel location/scale.
    Gumbel(GumbelParams),
    /// Log-Pearson III log-space moments.
    LogPearson3(LogPearson3Params),
}

impl Distribution {
    /// The method this distribution belongs to.
    pub fn method(&self) -> Method {
        match self {
            Distribution::Gumbel(_) => Method::Gumbel,
            Distribution::LogPearson3(_) => Method::LogPearson3,
        }
    }

    /// Depth (mm) with return period `tr` years, i.e. the quantile at
    /// `p = 1 − 1/tr`.
    ///
    /// `tr = 1` gives the lower tail of the distribution.
    ///
    /// # Errors
    ///
    /// [`FrequencyError::InvalidReturnPeriod`] if `tr` is not finite or
    /// below 1.
    pub fn invert(&self, tr: f64) -> Result<f64, FrequencyError> {
        let p = non_exceedance_probability(tr)?;
        match self {
            Distribution::Gumbel(params) => Ok(params.inverse_cdf(p)),
            Distribution::LogPearson3(params) => params.inverse_cdf(p),
        }
    }
}

/// Non-exceedance probability `1 − 1/tr` for a return period in years.
pub fn non_exceedance_probability(tr: f64) -> Result<f64, FrequencyError> {
    if !tr.is_finite() || tr < 1.0 {
        return Err(FrequencyError::InvalidReturnPeriod { value: tr });
    }
    Ok(1.0 - 1.0 / tr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gumbel() -> Distribution {
        Distribution::Gumbel(GumbelParams::new(30.0, 10.0).unwrap())
    }

    fn lp3() -> Distribution {
        Distribution::LogPearson3(LogPearson3Params::new(1.5, 0.2, 0.3).unwrap())
    }

    #[test]
    fn method_from_str() {
        assert_eq!("gumbel".parse::<Method>().unwrap(), Method::Gumbel);
        assert_eq!("Gumbel".parse::<Method>().unwrap(), Method::Gumbel);
        assert_eq!("lp3".parse::<Method>().unwrap(), Method::LogPearson3);
        assert_eq!(
            "Log-Pearson III".parse::<Method>().unwrap(),
            Method::LogPearson3
        );
        assert_eq!(
            "log_pearson3".parse::<Method>().unwrap(),
            Method::LogPearson3
        );
        assert!(matches!(
            "weibull".parse::<Method>(),
            Err(FrequencyError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn method_display_round_trips() {
        for m in Method::ALL {
            assert_eq!(m.to_string().parse::<Method>().unwrap(), m);
        }
    }

    #[test]
    fn gumbel_inversion() {
        assert_relative_eq!(gumbel().invert(100.0).unwrap(), 76.001_492, epsilon = 1e-5);
        assert_eq!(gumbel().invert(1.0).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn lp3_lower_tail_is_finite() {
        // Positive skew bounds the log-space variable from below.
        let depth = lp3().invert(1.0).unwrap();
        assert!(depth.is_finite() && depth > 0.0);
    }

    #[test]
    fn depth_increases_with_return_period() {
        for dist in [gumbel(), lp3()] {
            let mut prev = f64::NEG_INFINITY;
            for tr in [1.01, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0] {
                let d = dist.invert(tr).unwrap();
                assert!(d > prev, "{:?} not increasing at tr={tr}", dist.method());
                prev = d;
            }
        }
    }

    #[test]
    fn invalid_return_period() {
        for tr in [0.5, 0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                gumbel().invert(tr),
                Err(FrequencyError::InvalidReturnPeriod { .. })
            ));
        }
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(gumbel()).unwrap();
        assert_eq!(json["distribution"], "gumbel");
        assert_eq!(json["location"], 30.0);
        assert_eq!(json["scale"], 10.0);
    }
}
