//! Rainfall time-series container.

use chrono::{Datelike, NaiveDateTime};

use crate::error::MaximaError;

/// Ordered rainfall observations: one depth (mm) per timestamp.
///
/// Timestamps are strictly increasing. Depths are non-negative or `NaN`
/// (missing). The series is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallSeries {
    timestamps: Vec<NaiveDateTime>,
    depths: Vec<f64>,
}

impl RainfallSeries {
    /// Creates a new series after validating inputs.
    ///
    /// # Errors
    ///
    /// - [`MaximaError::LengthMismatch`] if the vectors differ in length.
    /// - [`MaximaError::UnsortedTimestamps`] if a timestamp is not strictly
    ///   greater than its predecessor (this also rejects duplicates).
    /// - [`MaximaError::NegativeDepth`] if a depth is below zero.
    pub fn new(timestamps: Vec<NaiveDateTime>, depths: Vec<f64>) -> Result<Self, MaximaError> {
        if timestamps.len() != depths.len() {
            return Err(MaximaError::LengthMismatch {
                timestamps: timestamps.len(),
                depths: depths.len(),
            });
        }

        if let Some(i) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MaximaError::UnsortedTimestamps { index: i + 1 });
        }

        if let Some((index, &value)) = depths.iter().enumerate().find(|(_, d)| **d < 0.0) {
            return Err(MaximaError::NegativeDepth { index, value });
        }

        Ok(Self { timestamps, depths })
    }

    /// Timestamps, strictly increasing.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Depths (mm); `NaN` marks a missing sample.
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Returns `true` if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Calendar year of every sample.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.timestamps.iter().map(|t| t.year())
    }

    /// First and last calendar year covered, if any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.timestamps.first()?.year();
        let last = self.timestamps.last()?.year();
        Some((first, last))
    }

    /// Largest single-sample depth, ignoring missing values.
    pub fn max_depth(&self) -> Option<f64> {
        self.depths
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(None, |acc, d| Some(acc.map_or(d, |a: f64| a.max(d))))
    }
}
