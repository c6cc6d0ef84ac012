// zscope-core/src/input.rs
//! Loading sample sets from JSON or CSV text.
//!
//! JSON input is an array of `{"label": ..., "value": ...}` objects. CSV input
//! is one `label,value` pair per line; blank lines and `#` comments are skipped
//! and a leading `label,value` header is optional.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::AnalysisError;
use crate::sample::Sample;

/// Reads and parses a sample file. The format follows the extension
/// (`.json`/`.csv`), falling back to sniffing the content.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    info!("Loading samples from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file {}", path.display()))?;

    let samples = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => parse_json_samples(&text),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => parse_csv_samples(&text),
        _ => parse_samples(&text),
    }
    .with_context(|| format!("Failed to parse sample file {}", path.display()))?;

    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parses text whose format is unknown: JSON when it starts with `[`, CSV otherwise.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>> {
    if text.trim_start().starts_with('[') {
        parse_json_samples(text)
    } else {
        parse_csv_samples(text)
    }
}

pub fn parse_json_samples(text: &str) -> Result<Vec<Sample>> {
    let samples: Vec<Sample> = serde_json::from_str(text).context("Invalid JSON sample array")?;
    ensure_unique_labels(&samples)?;
    Ok(samples)
}

pub fn parse_csv_samples(text: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (label, value) = line
            .split_once(',')
            .ok_or_else(|| anyhow!("Line {}: expected 'label,value'", index + 1))?;
        let (label, value) = (label.trim(), value.trim());

        if samples.is_empty() && label.eq_ignore_ascii_case("label") && value.eq_ignore_ascii_case("value") {
            continue;
        }
        if label.is_empty() {
            return Err(anyhow!("Line {}: empty label", index + 1));
        }

        let value: f64 = value
            .parse()
            .with_context(|| format!("Line {}: '{}' is not a number", index + 1, value))?;
        samples.push(Sample::new(label, value));
    }

    ensure_unique_labels(&samples)?;
    Ok(samples)
}

fn ensure_unique_labels(samples: &[Sample]) -> Result<(), AnalysisError> {
    let mut seen = HashSet::new();
    for sample in samples {
        if !seen.insert(sample.label.as_str()) {
            return Err(AnalysisError::DuplicateLabel(sample.label.clone()));
        }
    }
    Ok(())
}
