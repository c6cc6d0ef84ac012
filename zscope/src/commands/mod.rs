// zscope/src/commands/mod.rs
//! Subcommand implementations and the helpers they share.

pub mod analyze;
pub mod generate;

use anyhow::{Context, Result};
use log::debug;
use std::io;
use std::path::Path;
use is_terminal::IsTerminal;

use zscope_core::{load_samples, LetterSource, SampleSource, StaticSource, ZscopeConfig};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// A file-backed source when `input` is given, else the configured generator.
pub fn build_source(input: Option<&Path>, config: &ZscopeConfig) -> Result<Box<dyn SampleSource>> {
    match input {
        Some(path) => {
            let samples = load_samples(path)?;
            debug!("Using {} samples from {}", samples.len(), path.display());
            Ok(Box::new(StaticSource::new(path.display().to_string(), samples)))
        }
        None => {
            let source = LetterSource::new(config.generator.clone())
                .context("Invalid generator configuration")?;
            Ok(Box::new(source))
        }
    }
}
