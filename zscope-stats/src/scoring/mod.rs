// zscope-stats/src/scoring/mod.rs

use crate::statistics::SampleStats;
use crate::ZScore;

/// Number of standard deviations `value` lies from `stats.mean`.
///
/// A zero-variance sample has no point that deviates from the rest, so every
/// value scores `0.0` instead of dividing by zero.
pub fn z_score(value: f64, stats: &SampleStats) -> ZScore {
    if stats.std_dev == 0.0 {
        return 0.0;
    }
    let diff = value - stats.mean;
    if diff.is_finite() {
        diff / stats.std_dev
    } else {
        value / stats.std_dev - stats.mean / stats.std_dev
    }
}

/// A point is an outlier when its absolute z-score strictly exceeds the threshold.
pub fn is_outlier(z_score: ZScore, threshold: f64) -> bool {
    z_score.abs() > threshold
}

/// Outlier test against the sample the z-score came from.
///
/// A zero-variance sample has no outliers, whatever the threshold.
pub fn is_outlier_in(z_score: ZScore, stats: &SampleStats, threshold: f64) -> bool {
    stats.std_dev != 0.0 && is_outlier(z_score, threshold)
}

/// Rounds to a fixed number of decimal places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = libm::pow(10.0, decimals as f64);
    libm::round(value * factor) / factor
}
