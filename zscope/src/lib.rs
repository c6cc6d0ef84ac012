// zscope/src/lib.rs
//! # zscope CLI/TUI Application
//!
//! Terminal front end for the `zscope-core` outlier analyzer: an interactive
//! chart, a one-shot report and a sample generator.

pub mod commands;
pub mod cli;
pub mod ui;
pub mod logger;
pub mod tui;

// Re-export core TUI runner
pub use tui::run_tui;
