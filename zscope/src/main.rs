// zscope/src/main.rs
//! zscope entry point.
//!
//! Parses the CLI, loads configuration and theme, and dispatches to the
//! interactive chart or one of the headless subcommands.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use zscope::cli::{Cli, Commands, ViewCommand};
use zscope::commands::{self, analyze::run_analyze, generate::run_generate};
use zscope::logger;
use zscope::tui::{app::App, run_tui};
use zscope::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use zscope_core::ZscopeConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::View(_)));
    logger::init_logger(logger::level_for(cli.quiet, cli.debug, interactive));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(map) => map,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            commands::error_msg(format!("{:#}", e), &fallback);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &theme_map).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, theme_map: &ThemeMap) -> Result<()> {
    let config = ZscopeConfig::load_or_default(cli.config.as_deref())?;
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Some(Commands::Analyze(cmd)) => run_analyze(&cmd, config, theme_map),
        Some(Commands::Generate(cmd)) => run_generate(&cmd, config, theme_map, cli.quiet),
        Some(Commands::View(cmd)) => run_view(cmd, config, theme_map).await,
        None => run_view(ViewCommand::default(), config, theme_map).await,
    }
}

async fn run_view(cmd: ViewCommand, config: ZscopeConfig, theme_map: &ThemeMap) -> Result<()> {
    let config = config.with_overrides(cmd.threshold, cmd.seed);
    let source = commands::build_source(cmd.input.as_deref(), &config)?;
    let app = App::new(source, config.threshold).context("Failed to prepare the initial sample set")?;
    run_tui(app, theme_map.clone()).await.context("TUI failure")
}
