// zscope-core/src/threshold.rs
//! Validated z-score threshold.
//!
//! The analyzer itself accepts any `f64`; this type is the parsing boundary
//! for user-entered text (CLI arguments, environment, the TUI input box).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zscope_stats::scoring::round_to;

use crate::errors::AnalysisError;

/// Threshold used when neither the command line nor the config supplies one.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Increment applied by [`Threshold::step_up`] and [`Threshold::step_down`].
pub const THRESHOLD_STEP: f64 = 0.1;

/// A finite z-score threshold. Zero and negative values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self, AnalysisError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AnalysisError::InvalidThreshold(value.to_string()))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn step_up(self) -> Self {
        self.offset(THRESHOLD_STEP)
    }

    pub fn step_down(self) -> Self {
        self.offset(-THRESHOLD_STEP)
    }

    fn offset(self, delta: f64) -> Self {
        let next = round_to(self.0 + delta, 1);
        if next.is_finite() { Self(next) } else { self }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl FromStr for Threshold {
    type Err = AnalysisError;

    /// Parses free-form numeric text. Blank, non-numeric and non-finite
    /// input (`"inf"`, `"NaN"`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AnalysisError::InvalidThreshold(s.to_string()))?;
        if !value.is_finite() {
            return Err(AnalysisError::InvalidThreshold(s.to_string()));
        }
        Ok(Self(value))
    }
}

impl TryFrom<f64> for Threshold {
    type Error = AnalysisError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_thresholds() {
        assert_eq!("1.5".parse::<Threshold>().unwrap().value(), 1.5);
        assert_eq!("  2 ".parse::<Threshold>().unwrap().value(), 2.0);
        assert_eq!("0".parse::<Threshold>().unwrap().value(), 0.0);
        assert_eq!("-0.5".parse::<Threshold>().unwrap().value(), -0.5);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["", "   ", "abc", "1.2.3", "inf", "NaN", "-infinity"] {
            let err = input.parse::<Threshold>().unwrap_err();
            assert_eq!(err, AnalysisError::InvalidThreshold(input.to_string()), "input {:?}", input);
        }
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(Threshold::new(f64::NAN).is_err());
        assert!(Threshold::new(f64::INFINITY).is_err());
        assert!(Threshold::new(-3.0).is_ok());
    }

    #[test]
    fn steps_round_to_one_decimal() {
        let t = Threshold::default();
        assert_eq!(t.step_up().value(), 1.1);
        assert_eq!(t.step_down().value(), 0.9);
        assert_eq!(Threshold::new(0.0).unwrap().step_down().value(), -0.1);
        let mut t = Threshold::new(0.7).unwrap();
        for _ in 0..3 {
            t = t.step_up();
        }
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn serde_uses_plain_number() {
        let t: Threshold = serde_json::from_str("2.5").unwrap();
        assert_eq!(t.value(), 2.5);
        assert_eq!(serde_json::to_string(&t).unwrap(), "2.5");
    }
}
