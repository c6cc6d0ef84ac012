//! Module for managing the application's colour theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colours of console messages and of the chart. It supports
//! 16-color ANSI named colors for foreground styling and provides functionality
//! to load themes from YAML files and manage default theme settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use ratatui::style::{Color, Style};

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for prominent headers or section titles.
    Header,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Points within the threshold.
    Normal,
    /// Points whose |z-score| exceeds the threshold.
    Outlier,
    /// The currently selected point.
    Selected,
    /// Chart axes and the connecting line.
    Axis,
    /// Labels in the statistics panels and report.
    SummaryLabel,
    /// Values in the statistics panels and report.
    SummaryValue,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 10] = [
        ThemeEntry::Header, ThemeEntry::Info, ThemeEntry::Warn, ThemeEntry::Error,
        ThemeEntry::Normal, ThemeEntry::Outlier, ThemeEntry::Selected, ThemeEntry::Axis,
        ThemeEntry::SummaryLabel, ThemeEntry::SummaryValue,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    /// Attempts to parse a string into a `ThemeColor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Named(name) => name,
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the `ThemeColor` into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }

    /// Converts the `ThemeColor` into the equivalent terminal UI colour.
    pub fn to_tui_color(&self) -> Color {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::Gray,
                "brightblack" => Color::DarkGray,
                "brightred" => Color::LightRed,
                "brightgreen" => Color::LightGreen,
                "brightyellow" => Color::LightYellow,
                "brightblue" => Color::LightBlue,
                "brightmagenta" => Color::LightMagenta,
                "brightcyan" => Color::LightCyan,
                "brightwhite" => Color::White,
                _ => Color::Reset,
            },
        }
    }

    /// Converts the `ThemeColor` into the colour type used by report tables.
    pub fn to_table_color(&self) -> comfy_table::Color {
        use comfy_table::Color as Table;
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => Table::Black,
                "red" => Table::DarkRed,
                "green" => Table::DarkGreen,
                "yellow" => Table::DarkYellow,
                "blue" => Table::DarkBlue,
                "magenta" => Table::DarkMagenta,
                "cyan" => Table::DarkCyan,
                "white" => Table::Grey,
                "brightblack" => Table::DarkGrey,
                "brightred" => Table::Red,
                "brightgreen" => Table::Green,
                "brightyellow" => Table::Yellow,
                "brightblue" => Table::Blue,
                "brightmagenta" => Table::Magenta,
                "brightcyan" => Table::Cyan,
                "brightwhite" => Table::White,
                _ => Table::Reset,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

/// Foreground colour of `entry`, if the theme sets one.
pub fn theme_color(entry: ThemeEntry, theme_map: &ThemeMap) -> Option<&ThemeColor> {
    theme_map.get(&entry).and_then(|style| style.fg.as_ref())
}

/// Ratatui style for `entry`; the terminal default when unset.
pub fn tui_style(entry: ThemeEntry, theme_map: &ThemeMap) -> Style {
    match theme_color(entry, theme_map) {
        Some(color) => Style::default().fg(color.to_tui_color()),
        None => Style::default(),
    }
}

impl ThemeStyle {
    /// Loads a theme configuration from a YAML file on disk and merges it with default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, ThemeStyle { fg: Some(ThemeColor::named("cyan")) });
        default_theme.insert(ThemeEntry::Warn, ThemeStyle { fg: Some(ThemeColor::named("yellow")) });
        default_theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::named("red")) });

        // Chart colours
        default_theme.insert(ThemeEntry::Normal, ThemeStyle { fg: Some(ThemeColor::named("brightblue")) });
        default_theme.insert(ThemeEntry::Outlier, ThemeStyle { fg: Some(ThemeColor::named("brightred")) });
        default_theme.insert(ThemeEntry::Selected, ThemeStyle { fg: Some(ThemeColor::named("brightyellow")) });
        default_theme.insert(ThemeEntry::Axis, ThemeStyle { fg: Some(ThemeColor::named("brightblack")) });
        default_theme.insert(ThemeEntry::SummaryLabel, ThemeStyle { fg: Some(ThemeColor::named("brightblack")) });

        for entry in ThemeEntry::ALL {
            default_theme.entry(entry).or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::named("white")) });
        }
        default_theme
    }
}
