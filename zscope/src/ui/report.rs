//! Console rendering of an [`AnalysisReport`].
//!
//! Produces a per-sample table followed by the basic and outlier statistics
//! blocks and a one-line legend.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use zscope_core::AnalysisReport;

use crate::ui::theme::{theme_color, ThemeEntry, ThemeMap};

pub const NORMAL_LABEL: &str = "Within normal range";
pub const OUTLIER_LABEL: &str = "Outlier";

/// Legend line shown under the chart and the report.
pub fn threshold_legend(threshold: f64) -> String {
    format!("Values with |z-score| greater than {} are marked as outliers", threshold)
}

/// Builds the results table.
pub fn build_results_table(report: &AnalysisReport, theme_map: &ThemeMap, enable_colors: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Label", "Value", "Z-score", "Status"]);

    if enable_colors {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    for (index, result) in report.results.iter().enumerate() {
        let (status, entry) = if result.is_outlier {
            (OUTLIER_LABEL, ThemeEntry::Outlier)
        } else {
            (NORMAL_LABEL, ThemeEntry::Normal)
        };

        let mut status_cell = Cell::new(status);
        if let Some(color) = theme_color(entry, theme_map) {
            status_cell = status_cell.fg(color.to_table_color());
        }

        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(&result.label),
            Cell::new(result.value).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", result.zscore)).set_alignment(CellAlignment::Right),
            status_cell,
        ]);
    }

    table
}

/// Renders the statistics blocks and legend as plain lines.
pub fn render_summary(report: &AnalysisReport, theme_map: &ThemeMap, enable_colors: bool) -> String {
    let heading = |text: &str| -> String {
        match theme_color(ThemeEntry::Header, theme_map) {
            Some(color) if enable_colors => text.color(color.to_ansi_color()).bold().to_string(),
            _ => text.to_string(),
        }
    };

    let stats = &report.statistics;
    let outliers = &report.outliers;

    let mut lines = vec![
        heading("Basic statistics"),
        format!("  {:<20}{:.2}", "Mean:", stats.mean),
        format!("  {:<20}{:.2}", "Standard deviation:", stats.std_dev),
        String::new(),
        heading("Outlier statistics"),
        format!("  {:<20}{} ({}%)", "Count:", outliers.count, outliers.percentage_label()),
    ];
    if let Some((min, max)) = outliers.range() {
        lines.push(format!("  {:<20}{} - {}", "Range:", min, max));
    }
    lines.push(String::new());
    lines.push(threshold_legend(report.threshold));

    lines.join("\n")
}

/// Full console report: table, blank line, summary.
pub fn render_report(report: &AnalysisReport, theme_map: &ThemeMap, enable_colors: bool) -> String {
    format!(
        "{}\n\n{}",
        build_results_table(report, theme_map, enable_colors),
        render_summary(report, theme_map, enable_colors)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use zscope_core::{headless_analyze, Sample, Threshold};

    fn skewed_report() -> AnalysisReport {
        let samples = vec![
            Sample::new("A", 10.0),
            Sample::new("B", 10.0),
            Sample::new("C", 10.0),
            Sample::new("D", 100.0),
        ];
        headless_analyze(samples, Threshold::default()).unwrap()
    }

    #[test]
    fn summary_lists_statistics_and_range() {
        let theme = ThemeStyle::default_theme_map();
        let summary = render_summary(&skewed_report(), &theme, false);
        assert!(summary.contains("Mean:               32.50"), "{}", summary);
        assert!(summary.contains("Standard deviation: 45.00"), "{}", summary);
        assert!(summary.contains("Count:              1 (25.0%)"), "{}", summary);
        assert!(summary.contains("Range:              100 - 100"), "{}", summary);
        assert!(summary.ends_with("greater than 1 are marked as outliers"));
    }

    #[test]
    fn summary_hides_range_without_outliers() {
        let theme = ThemeStyle::default_theme_map();
        let samples = vec![Sample::new("A", 5.0), Sample::new("B", 5.0), Sample::new("C", 5.0)];
        let report = headless_analyze(samples, Threshold::default()).unwrap();
        let summary = render_summary(&report, &theme, false);
        assert!(summary.contains("0 (0.0%)"));
        assert!(!summary.contains("Range:"));
    }

    #[test]
    fn table_marks_outliers() {
        let theme = ThemeStyle::default_theme_map();
        let rendered = build_results_table(&skewed_report(), &theme, false).to_string();
        let d_row = rendered.lines().find(|l| l.contains(" D ")).unwrap();
        assert!(d_row.contains("1.50"));
        assert!(d_row.contains(OUTLIER_LABEL));
        let a_row = rendered.lines().find(|l| l.contains(" A ")).unwrap();
        assert!(a_row.contains("-0.50"));
        assert!(a_row.contains(NORMAL_LABEL));
    }
}
