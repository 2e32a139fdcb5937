//! Calendar-period rainfall totals.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::MaximaError;
use crate::series::RainfallSeries;

/// Calendar aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Calendar day.
    Daily,
    /// Calendar month.
    Monthly,
    /// Calendar year.
    Annual,
}

impl Period {
    /// First day of the period containing `date`.
    pub fn start_of(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => date,
            Period::Monthly => date.with_day(1).unwrap_or(date),
            Period::Annual => date.with_ordinal(1).unwrap_or(date),
        }
    }

    /// First day of the period after the one starting at `start`.
    ///
    /// `None` past the end of the supported calendar.
    pub fn next_start(&self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Daily => start.succ_opt(),
            Period::Monthly => start.checked_add_months(Months::new(1)),
            Period::Annual => start.with_year(start.year() + 1),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
            Period::Annual => "annual",
        })
    }
}

impl FromStr for Period {
    type Err = MaximaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Period::Daily),
            "m" | "month" | "monthly" => Ok(Period::Monthly),
            "y" | "year" | "annual" | "yearly" => Ok(Period::Annual),
            _ => Err(MaximaError::UnknownPeriod {
                name: s.to_string(),
            }),
        }
    }
}

/// Rainfall accumulated over one calendar period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodTotal {
    /// First day of the period.
    pub start: NaiveDate,
    /// Sum of valid depths (mm); 0 when every sample is missing.
    pub total: f64,
    /// Number of non-missing samples.
    pub valid: usize,
    /// Number of samples in the period, missing included.
    pub samples: usize,
}

impl PeriodTotal {
    fn empty(start: NaiveDate) -> Self {
        Self {
            start,
            total: 0.0,
            valid: 0,
            samples: 0,
        }
    }
}

/// Sums the series over calendar days, months or years.
///
/// Every period from the first sample to the last is reported, in time
/// order. Periods the record skips entirely get a zero total with no
/// samples, so `samples == 0` tells a gap from a dry period.
pub fn period_totals(series: &RainfallSeries, period: Period) -> Vec<PeriodTotal> {
    let mut out: Vec<PeriodTotal> = Vec::new();
    for (t, &d) in series.timestamps().iter().zip(series.depths()) {
        let start = period.start_of(t.date());
        let is_valid = d.is_finite();
        if let Some(last) = out.last() {
            let mut next = period.next_start(last.start);
            while let Some(gap) = next.filter(|&g| g < start) {
                out.push(PeriodTotal::empty(gap));
                next = period.next_start(gap);
            }
        }
        match out.last_mut() {
            Some(last) if last.start == start => {
                last.samples += 1;
                if is_valid {
                    last.total += d;
                    last.valid += 1;
                }
            }
            _ => out.push(PeriodTotal {
                start,
                total: if is_valid { d } else { 0.0 },
                valid: usize::from(is_valid),
                samples: 1,
            }),
        }
    }
    out
}
