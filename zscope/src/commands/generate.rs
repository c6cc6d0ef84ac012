// zscope/src/commands/generate.rs
//! `zscope generate`: write a generated sample set as JSON.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};

use zscope_core::{LetterSource, SampleSource, ZscopeConfig};

use crate::cli::GenerateCommand;
use crate::commands::info_msg;
use crate::ui::theme::ThemeMap;

pub fn run_generate(cmd: &GenerateCommand, config: ZscopeConfig, theme_map: &ThemeMap, quiet: bool) -> Result<()> {
    let config = config.with_overrides(None, cmd.seed);
    let mut source = LetterSource::new(config.generator).context("Invalid generator configuration")?;
    let samples = source.samples()?;
    let json = serde_json::to_string_pretty(&samples).context("Failed to serialize samples")?;

    match &cmd.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write samples to {}", path.display()))?;
            if !quiet {
                info_msg(format!("Wrote {} samples to {}", samples.len(), path.display()), theme_map);
            }
        }
        None => {
            writeln!(io::stdout().lock(), "{}", json)?;
        }
    }
    Ok(())
}
