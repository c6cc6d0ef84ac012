// File: zscope-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the analyzer in headless mode (non-UI).
//! Provides a one-shot analysis that bundles statistics, per-sample results
//! and the outlier summary into a single serializable report.

use serde::Serialize;

use crate::analyzer::Analysis;
use crate::errors::AnalysisError;
use crate::sample::{AnalysisResult, OutlierSummary, Sample, SummaryStatistics};
use crate::threshold::Threshold;

/// Everything the display layer needs for one (samples, threshold) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub threshold: f64,
    pub statistics: SummaryStatistics,
    pub results: Vec<AnalysisResult>,
    pub outliers: OutlierSummary,
}

impl AnalysisReport {
    /// Builds a report from an existing analysis without recomputing z-scores.
    pub fn from_analysis(analysis: &Analysis, threshold: Threshold) -> Self {
        let results = analysis.classify(threshold.value());
        let outliers = crate::analyzer::summarize_outliers(&results);
        Self {
            threshold: threshold.value(),
            statistics: analysis.statistics(),
            results,
            outliers,
        }
    }

    /// Results currently flagged as outliers, in input order.
    pub fn outlier_results(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.results.iter().filter(|r| r.is_outlier)
    }
}

/// Runs the full analysis for one sample set and threshold.
///
/// # Arguments
///
/// * `samples` - The ordered sample set (at least two samples).
/// * `threshold` - The validated z-score threshold.
pub fn headless_analyze(samples: Vec<Sample>, threshold: Threshold) -> Result<AnalysisReport, AnalysisError> {
    let analysis = Analysis::new(samples)?;
    Ok(AnalysisReport::from_analysis(&analysis, threshold))
}
