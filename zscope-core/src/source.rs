// zscope-core/src/source.rs
//! Where sample sets come from.
//!
//! The analyzer never depends on this module; callers pick a [`SampleSource`]
//! and hand its output to [`crate::analyzer`].

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::errors::AnalysisError;
use crate::sample::Sample;

/// A producer of ordered, labeled sample sets.
///
/// Each call may return a fresh set (the TUI calls it again on "regenerate").
pub trait SampleSource: Send {
    fn samples(&mut self) -> Result<Vec<Sample>, AnalysisError>;

    /// Short human-readable description for logs and headers.
    fn describe(&self) -> String;
}

/// One sample per label character with a uniformly random integer value.
#[derive(Debug)]
pub struct LetterSource {
    config: GeneratorConfig,
    rng: StdRng,
}

impl LetterSource {
    pub fn new(config: GeneratorConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }
}

impl SampleSource for LetterSource {
    fn samples(&mut self) -> Result<Vec<Sample>, AnalysisError> {
        let (min, max) = (self.config.min, self.config.max);
        let samples: Vec<Sample> = self.config.labels
            .chars()
            .map(|label| Sample::new(label, self.rng.random_range(min..=max) as f64))
            .collect();
        debug!("Generated {} samples in [{}, {}]", samples.len(), min, max);
        Ok(samples)
    }

    fn describe(&self) -> String {
        match self.config.seed {
            Some(seed) => format!("random letters (seed {})", seed),
            None => "random letters".to_string(),
        }
    }
}

/// A fixed sample set, e.g. loaded from a file.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    samples: Vec<Sample>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self { name: name.into(), samples }
    }
}

impl SampleSource for StaticSource {
    fn samples(&mut self) -> Result<Vec<Sample>, AnalysisError> {
        Ok(self.samples.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
