//! Configuration management for `zscope-core`.
//!
//! This module defines the analyzer and generator settings, handles YAML
//! (de)serialization, and resolves which configuration file applies.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::AnalysisError;
use crate::threshold::Threshold;

/// Alphabet used for generated sample labels.
pub const DEFAULT_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Settings for the random letter sample generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// One sample is generated per character, in order.
    pub labels: String,
    /// Inclusive lower bound of generated values.
    pub min: i64,
    /// Inclusive upper bound of generated values.
    pub max: i64,
    /// Fixed RNG seed for reproducible data. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.to_string(),
            min: 1,
            max: 100,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.labels.is_empty() {
            return Err(AnalysisError::EmptyLabelSet);
        }
        if self.min > self.max {
            return Err(AnalysisError::InvalidGeneratorRange { min: self.min, max: self.max });
        }
        let mut seen = HashSet::new();
        for c in self.labels.chars() {
            if !seen.insert(c) {
                return Err(AnalysisError::DuplicateLabel(c.to_string()));
            }
        }
        Ok(())
    }
}

/// Represents the top-level configuration structure for zscope.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ZscopeConfig {
    /// Initial z-score threshold.
    pub threshold: Threshold,
    pub generator: GeneratorConfig,
}

impl ZscopeConfig {
    /// Loads a configuration from a YAML file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ZscopeConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Loads the defaults from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: ZscopeConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Uses `explicit` when given, otherwise the first existing candidate
    /// path, otherwise the embedded defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No configuration file found; using defaults.");
                Self::load_default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.generator.validate()
    }

    /// Applies command-line overrides on top of the loaded file.
    pub fn with_overrides(mut self, threshold: Option<Threshold>, seed: Option<u64>) -> Self {
        if let Some(threshold) = threshold {
            debug!("Overriding threshold with user value: {}", threshold);
            self.threshold = threshold;
        }
        if let Some(seed) = seed {
            debug!("Overriding generator seed with user value: {}", seed);
            self.generator.seed = Some(seed);
        }
        self
    }
}

/// Locations searched for a config file when none is given explicitly.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        dirs::config_dir().map(|p| p.join("zscope").join("config.yaml")),
        dirs::home_dir().map(|p| p.join(".zscope").join("config.yaml")),
        Some(PathBuf::from("./zscope.yaml")),
    ];

    candidates.into_iter().flatten().collect()
}
