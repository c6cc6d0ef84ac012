// zscope/src/commands/analyze.rs
//! `zscope analyze`: one-shot report on stdout.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use is_terminal::IsTerminal;

use zscope_core::{headless_analyze, ZscopeConfig};

use crate::cli::AnalyzeCommand;
use crate::commands::{build_source, warn_msg};
use crate::ui::report::render_report;
use crate::ui::theme::ThemeMap;

pub fn run_analyze(cmd: &AnalyzeCommand, config: ZscopeConfig, theme_map: &ThemeMap) -> Result<()> {
    let config = config.with_overrides(cmd.threshold, cmd.seed);
    if cmd.input.is_some() && cmd.seed.is_some() {
        warn_msg("--seed has no effect when --input is given", theme_map);
    }

    let mut source = build_source(cmd.input.as_deref(), &config)?;
    let samples = source.samples().context("Failed to obtain samples")?;
    info!("Analyzing {} samples from {}", samples.len(), source.describe());

    let report = headless_analyze(samples, config.threshold).context("Analysis failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmd.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{}", json)?;
    } else {
        let colors = io::stdout().is_terminal();
        writeln!(out, "{}", render_report(&report, theme_map, colors))?;
    }
    Ok(())
}
