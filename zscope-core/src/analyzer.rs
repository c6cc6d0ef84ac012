// zscope-core/src/analyzer.rs
//! The outlier analyzer.
//!
//! Three pure operations form the contract: [`compute_summary_statistics`]
//! derives the mean and sample standard deviation once per sample set,
//! [`classify`] scores and flags each sample against a threshold, and
//! [`summarize_outliers`] aggregates the flagged samples.
//!
//! [`Analysis`] caches the statistics and z-scores of one sample set so a
//! threshold change only re-runs the comparison step.

use log::debug;
use zscope_stats::scoring::{is_outlier_in, z_score};
use zscope_stats::statistics::{compute_stats_by, SampleStats};
use zscope_stats::MIN_SAMPLE_SIZE;

use crate::errors::AnalysisError;
use crate::sample::{AnalysisResult, OutlierSummary, Sample, SummaryStatistics};

/// Computes the mean and Bessel-corrected standard deviation of `samples`.
///
/// # Errors
/// * [`AnalysisError::InsufficientData`] when fewer than two samples are given.
/// * [`AnalysisError::NonFiniteValue`] when any value is NaN or infinite.
/// * [`AnalysisError::SpreadOverflow`] when the standard deviation exceeds `f64::MAX`.
pub fn compute_summary_statistics(samples: &[Sample]) -> Result<SummaryStatistics, AnalysisError> {
    if samples.len() < MIN_SAMPLE_SIZE {
        return Err(AnalysisError::InsufficientData {
            required: MIN_SAMPLE_SIZE,
            actual: samples.len(),
        });
    }

    if let Some(bad) = samples.iter().find(|s| !s.value.is_finite()) {
        return Err(AnalysisError::NonFiniteValue { label: bad.label.clone() });
    }

    let stats = compute_stats_by(samples, |s| s.value).ok_or(AnalysisError::InsufficientData {
        required: MIN_SAMPLE_SIZE,
        actual: samples.len(),
    })?;
    if !stats.std_dev.is_finite() {
        return Err(AnalysisError::SpreadOverflow);
    }
    Ok(stats.into())
}

/// Scores every sample against `stats` and flags those whose absolute
/// z-score exceeds `threshold`.
///
/// Output order matches input order. When `stats.std_dev` is zero every
/// z-score is `0.0` and no sample is flagged, whatever the threshold.
pub fn classify(samples: &[Sample], stats: &SummaryStatistics, threshold: f64) -> Vec<AnalysisResult> {
    let kernel: SampleStats = (*stats).into();
    samples
        .iter()
        .map(|sample| {
            let zscore = z_score(sample.value, &kernel);
            AnalysisResult {
                label: sample.label.clone(),
                value: sample.value,
                zscore,
                is_outlier: is_outlier_in(zscore, &kernel, threshold),
            }
        })
        .collect()
}

/// Counts the flagged results and reports their share and value range.
///
/// With no outliers, `min` and `max` are the `0.0` sentinel.
pub fn summarize_outliers(results: &[AnalysisResult]) -> OutlierSummary {
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for result in results.iter().filter(|r| r.is_outlier) {
        count += 1;
        min = min.min(result.value);
        max = max.max(result.value);
    }

    if count == 0 {
        return OutlierSummary::default();
    }

    OutlierSummary {
        count,
        percentage: 100.0 * count as f64 / results.len() as f64,
        min,
        max,
    }
}

/// A sample set with its statistics and z-scores computed once.
///
/// Holds no threshold; callers pass the current one to [`Analysis::classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    samples: Vec<Sample>,
    statistics: SummaryStatistics,
    zscores: Vec<f64>,
}

impl Analysis {
    pub fn new(samples: Vec<Sample>) -> Result<Self, AnalysisError> {
        let statistics = compute_summary_statistics(&samples)?;
        let kernel: SampleStats = statistics.into();
        let zscores = samples.iter().map(|s| z_score(s.value, &kernel)).collect();

        debug!(
            "Analysis over {} samples: mean={:.4}, std_dev={:.4}",
            samples.len(),
            statistics.mean,
            statistics.std_dev
        );

        Ok(Self { samples, statistics, zscores })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn statistics(&self) -> SummaryStatistics {
        self.statistics
    }

    pub fn zscores(&self) -> &[f64] {
        &self.zscores
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Reclassifies the cached z-scores. Identical to [`classify`] on the same inputs.
    pub fn classify(&self, threshold: f64) -> Vec<AnalysisResult> {
        let kernel: SampleStats = self.statistics.into();
        self.samples
            .iter()
            .zip(&self.zscores)
            .map(|(sample, &zscore)| AnalysisResult {
                label: sample.label.clone(),
                value: sample.value,
                zscore,
                is_outlier: is_outlier_in(zscore, &kernel, threshold),
            })
            .collect()
    }

    pub fn summarize(&self, threshold: f64) -> OutlierSummary {
        summarize_outliers(&self.classify(threshold))
    }
}
