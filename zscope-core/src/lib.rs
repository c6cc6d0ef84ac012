// zscope-core/src/lib.rs
//! # zscope Core Library
//!
//! `zscope-core` provides the platform-independent logic behind zscope: it turns
//! an ordered set of labeled samples into per-sample z-scores, classifies each
//! sample against a z-score threshold, and summarizes the outliers.
//!
//! The analyzer is pure and stateless. The current sample set, threshold and
//! selected point all belong to the caller, which re-invokes the analyzer when
//! any of them changes.
//!
//! ## Modules
//!
//! * `analyzer`: `compute_summary_statistics`, `classify`, `summarize_outliers` and the cached `Analysis`.
//! * `sample`: Data structures exchanged with callers.
//! * `threshold`: Parsing and stepping of user-entered thresholds.
//! * `source`: The `SampleSource` trait and the random letter generator.
//! * `input`: JSON and CSV sample file loading.
//! * `config`: YAML configuration for the threshold and the generator.
//! * `headless`: One-shot analysis producing a serializable report.
//! * `errors`: The `AnalysisError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use zscope_core::{classify, compute_summary_statistics, summarize_outliers, Sample};
//!
//! let samples = vec![
//!     Sample::new("A", 10.0),
//!     Sample::new("B", 10.0),
//!     Sample::new("C", 10.0),
//!     Sample::new("D", 100.0),
//! ];
//!
//! let stats = compute_summary_statistics(&samples).unwrap();
//! let results = classify(&samples, &stats, 1.0);
//! let summary = summarize_outliers(&results);
//!
//! assert_eq!(summary.count, 1);
//! assert_eq!(summary.percentage_label(), "25.0");
//! ```
//!
//! ## Error Handling
//!
//! Analyzer operations return [`AnalysisError`]. A zero-variance sample set is
//! not an error: every z-score is `0.0` and nothing is flagged. File and
//! configuration loaders return `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod headless;
pub mod input;
pub mod sample;
pub mod source;
pub mod threshold;

pub use analyzer::{classify, compute_summary_statistics, summarize_outliers, Analysis};
pub use config::{GeneratorConfig, ZscopeConfig, DEFAULT_LABELS};
pub use errors::AnalysisError;
pub use headless::{headless_analyze, AnalysisReport};
pub use input::{load_samples, parse_samples};
pub use sample::{AnalysisResult, OutlierSummary, Sample, SummaryStatistics};
pub use source::{LetterSource, SampleSource, StaticSource};
pub use threshold::{Threshold, DEFAULT_THRESHOLD, THRESHOLD_STEP};
