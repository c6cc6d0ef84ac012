// zscope-core/src/sample.rs
//! Data structures exchanged between the analyzer and its callers.
//!
//! Everything here is plain data: a [`Sample`] goes in, an [`AnalysisResult`]
//! per sample plus the [`SummaryStatistics`] and [`OutlierSummary`] records
//! come out. None of these types carry threshold or selection state.

use serde::{Deserialize, Serialize};
use zscope_stats::scoring::round_to;
use zscope_stats::statistics::SampleStats;

/// A single labeled numeric observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Caller-supplied unique identifier (e.g. a letter).
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Mean and sample standard deviation of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl From<SampleStats> for SummaryStatistics {
    fn from(stats: SampleStats) -> Self {
        Self { mean: stats.mean, std_dev: stats.std_dev }
    }
}

impl From<SummaryStatistics> for SampleStats {
    fn from(stats: SummaryStatistics) -> Self {
        Self { mean: stats.mean, std_dev: stats.std_dev }
    }
}

/// Classification of one sample against a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: String,
    pub value: f64,
    pub zscore: f64,
    pub is_outlier: bool,
}

/// Aggregate view over the samples currently classified as outliers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub count: usize,
    /// `100 * count / total` at full precision.
    pub percentage: f64,
    /// Smallest outlier value, `0.0` when there are no outliers.
    pub min: f64,
    /// Largest outlier value, `0.0` when there are no outliers.
    pub max: f64,
}

impl OutlierSummary {
    /// Percentage rounded to one decimal place, formatted for display.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", round_to(self.percentage, 1))
    }

    /// `Some((min, max))` only when at least one outlier exists, so callers
    /// never render the zero sentinel as a real range.
    pub fn range(&self) -> Option<(f64, f64)> {
        (self.count > 0).then_some((self.min, self.max))
    }
}
