//! errors.rs - Custom error types for the zscope-core library.
//!
//! This module defines a structured error enum for the analyzer, providing
//! specific, actionable error types that callers can handle programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types raised by the analyzer and
/// its input layers.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("At least {required} samples are required to compute a sample standard deviation, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Sample '{label}' has a non-finite value")]
    NonFiniteValue { label: String },

    #[error("Invalid z-score threshold '{0}': expected a finite number")]
    InvalidThreshold(String),

    #[error("The spread of the sample set is too large to represent as an f64")]
    SpreadOverflow,

    #[error("Duplicate sample label '{0}'")]
    DuplicateLabel(String),

    #[error("Invalid generator range: min ({min}) is greater than max ({max})")]
    InvalidGeneratorRange { min: i64, max: i64 },

    #[error("The generator label set is empty")]
    EmptyLabelSet,
}
