// zscope/src/cli.rs
//! This file defines the command-line interface (CLI) for the zscope application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zscope_core::Threshold;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "zscope",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore z-score outliers in your terminal",
    long_about = "zscope generates or loads a labeled sample set, computes each sample's z-score against the sample mean and standard deviation, and marks samples whose absolute z-score exceeds an adjustable threshold as outliers. Run without a subcommand to open the interactive chart.",
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a zscope configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run (defaults to `view`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available commands for the `zscope` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Opens the interactive outlier chart.
    #[command(about = "Open the interactive outlier chart.")]
    View(ViewCommand),

    /// Prints a one-shot outlier report.
    #[command(about = "Print an outlier report for a generated or loaded sample set.")]
    Analyze(AnalyzeCommand),

    /// Emits a generated sample set as JSON.
    #[command(about = "Generate a random labeled sample set as JSON.")]
    Generate(GenerateCommand),
}

/// Arguments for the `view` command.
#[derive(Parser, Debug, Default)]
pub struct ViewCommand {
    /// Initial z-score threshold.
    #[arg(long, short = 't', env = "ZSCOPE_THRESHOLD", allow_negative_numbers = true, help = "Initial z-score threshold (default: 1.0).")]
    pub threshold: Option<Threshold>,

    /// Seed for reproducible generated data.
    #[arg(long, short = 's', value_name = "N", help = "Seed the sample generator for reproducible data.")]
    pub seed: Option<u64>,

    /// Load samples from a file instead of generating them.
    #[arg(long, short = 'i', value_name = "FILE", help = "Load samples from a JSON or CSV file.")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// Path to a sample file (generates samples if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Load samples from a JSON or CSV file instead of generating them.")]
    pub input: Option<PathBuf>,

    /// The z-score threshold.
    #[arg(long, short = 't', env = "ZSCOPE_THRESHOLD", allow_negative_numbers = true, help = "Z-score threshold (default: 1.0).")]
    pub threshold: Option<Threshold>,

    /// Seed for reproducible generated data.
    #[arg(long, short = 's', value_name = "N", help = "Seed the sample generator for reproducible data.")]
    pub seed: Option<u64>,

    /// Print the report as JSON.
    #[arg(long = "json", help = "Print the full report as JSON to stdout.")]
    pub json: bool,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Seed for reproducible generated data.
    #[arg(long, short = 's', value_name = "N", help = "Seed the sample generator for reproducible data.")]
    pub seed: Option<u64>,

    /// Write the samples to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the samples to a file instead of stdout.")]
    pub output: Option<PathBuf>,
}
