use libm::{fabs, frexp, ldexp, sqrt};

use crate::MIN_SAMPLE_SIZE;

/// Location and spread of a sample, computed once per sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// The arithmetic mean of the sampled values.
    pub mean: f64,
    /// The sample standard deviation (Bessel's correction, divisor `n - 1`).
    pub std_dev: f64,
}

/// Calculates mean and sample standard deviation for a slice of values.
///
/// Returns `None` when fewer than [`MIN_SAMPLE_SIZE`] values are supplied,
/// since the `n - 1` divisor leaves no degrees of freedom.
///
/// The mean of finite values is always finite. The standard deviation can
/// still exceed `f64::MAX` when values near both ends of the `f64` range are
/// mixed; callers should check it.
pub fn compute_stats(values: &[f64]) -> Option<SampleStats> {
    compute_stats_by(values, |value| *value)
}

/// Same as [`compute_stats`], reading each value out of a borrowed record
/// so callers do not need to collect an intermediate `Vec<f64>`.
pub fn compute_stats_by<T, F>(items: &[T], value_of: F) -> Option<SampleStats>
where
    F: Fn(&T) -> f64,
{
    if items.len() < MIN_SAMPLE_SIZE {
        return None;
    }

    // A constant sample has exactly zero spread; summing would leave rounding residue.
    let first = value_of(&items[0]);
    if items.iter().all(|item| value_of(item) == first) {
        return Some(SampleStats { mean: first, std_dev: 0.0 });
    }

    let len = items.len() as f64;

    // Rescale by a power of two so |x| <= 1: sums stay finite and subnormal
    // differences are lifted before squaring. The scaling itself is exact.
    let largest = items.iter().map(|item| fabs(value_of(item))).fold(0.0, f64::max);
    let (_, exponent) = frexp(largest);
    let scaled = |item: &T| ldexp(value_of(item), -exponent);

    // 1. Arithmetic mean
    let mean = items.iter().map(&scaled).sum::<f64>() / len;

    // 2. Sum of squared differences from the mean
    let squared = items.iter()
        .map(|item| {
            let diff = scaled(item) - mean;
            diff * diff
        })
        .sum::<f64>();

    // 3. Bessel's correction
    let variance = squared / (len - 1.0);

    Some(SampleStats {
        mean: ldexp(mean, exponent),
        std_dev: ldexp(sqrt(variance), exponent),
    })
}
