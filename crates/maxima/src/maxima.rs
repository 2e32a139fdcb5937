//! Annual-maxima result type.

use std::collections::BTreeMap;

use serde::Serialize;

/// Maximum accumulated depth per calendar year for one aggregation
/// duration.
///
/// Years without any valid accumulation are absent. Iteration is in
/// ascending year order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualMaxima {
    duration_hours: u32,
    maxima: BTreeMap<i32, f64>,
}

impl AnnualMaxima {
    /// Creates a result from pre-computed maxima.
    pub(crate) fn new(duration_hours: u32, maxima: BTreeMap<i32, f64>) -> Self {
        Self {
            duration_hours,
            maxima,
        }
    }

    /// Builds maxima from `(year, depth)` pairs computed elsewhere.
    ///
    /// Non-finite depths are dropped; a repeated year keeps the larger value.
    pub fn from_pairs<I>(duration_hours: u32, pairs: I) -> Self
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut maxima = BTreeMap::new();
        for (year, depth) in pairs.into_iter().filter(|(_, d)| d.is_finite()) {
            maxima
                .entry(year)
                .and_modify(|m: &mut f64| *m = m.max(depth))
                .or_insert(depth);
        }
        Self::new(duration_hours, maxima)
    }

    /// Aggregation duration (hours) these maxima were computed for.
    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    /// Maximum for a calendar year, if that year had valid data.
    pub fn get(&self, year: i32) -> Option<f64> {
        self.maxima.get(&year).copied()
    }

    /// Years with a maximum, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.maxima.keys().copied().collect()
    }

    /// The sample of maxima in year order.
    pub fn values(&self) -> Vec<f64> {
        self.maxima.values().copied().collect()
    }

    /// `(year, maximum)` pairs in year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.maxima.iter().map(|(&y, &v)| (y, v))
    }

    /// Number of years with a maximum.
    pub fn len(&self) -> usize {
        self.maxima.len()
    }

    /// Returns `true` if no year had valid data.
    pub fn is_empty(&self) -> bool {
        self.maxima.is_empty()
    }
}
