// zscope/src/tui/ui.rs
//! TUI rendering logic for zscope.
//!
//! Lays out the header, the outlier chart, the statistics panels and the
//! footer with either the threshold legend or the threshold editor.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputMode};
use crate::ui::report::{threshold_legend, NORMAL_LABEL, OUTLIER_LABEL};
use crate::ui::theme::{tui_style, ThemeEntry, ThemeMap};

/// Main draw cycle.
pub fn draw(f: &mut Frame, app: &App, theme_map: &ThemeMap) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(7),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, theme_map, vertical_chunks[0]);
    render_chart(f, app, theme_map, vertical_chunks[1]);
    render_panels(f, app, theme_map, vertical_chunks[2]);
    render_footer(f, app, theme_map, vertical_chunks[3]);
}

fn rounded_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let header_text = Line::from(vec![
        Span::styled(" zscope ", tui_style(ThemeEntry::Header, theme_map).bold()),
        Span::raw(format!("| {} | ", app.source_name)),
        Span::styled("[Q] Quit ", tui_style(ThemeEntry::Error, theme_map)),
        Span::styled("[R] Regenerate ", tui_style(ThemeEntry::Normal, theme_map)),
        Span::styled("[+/-] Threshold ", tui_style(ThemeEntry::Warn, theme_map)),
        Span::styled("[T] Edit ", tui_style(ThemeEntry::Warn, theme_map)),
        Span::styled("[←/→] Select ", tui_style(ThemeEntry::Selected, theme_map)),
        Span::styled("[Esc] Clear ", tui_style(ThemeEntry::Axis, theme_map)),
    ]);

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(rounded_block("").border_style(tui_style(ThemeEntry::Axis, theme_map)));
    f.render_widget(header, area);
}

/// Value bounds with a margin so points never sit on the frame.
fn y_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(1.0);
    [min - pad, max + pad]
}

fn render_chart(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let line: Vec<(f64, f64)> = app.results.iter().enumerate()
        .map(|(i, r)| (i as f64, r.value))
        .collect();
    let normal: Vec<(f64, f64)> = app.results.iter().enumerate()
        .filter(|(_, r)| !r.is_outlier)
        .map(|(i, r)| (i as f64, r.value))
        .collect();
    let outliers: Vec<(f64, f64)> = app.results.iter().enumerate()
        .filter(|(_, r)| r.is_outlier)
        .map(|(i, r)| (i as f64, r.value))
        .collect();
    let selected: Vec<(f64, f64)> = app.selected
        .and_then(|i| app.results.get(i).map(|r| (i as f64, r.value)))
        .into_iter()
        .collect();

    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(tui_style(ThemeEntry::Axis, theme_map))
            .data(&line),
        Dataset::default()
            .name(NORMAL_LABEL)
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(tui_style(ThemeEntry::Normal, theme_map))
            .data(&normal),
        Dataset::default()
            .name(OUTLIER_LABEL)
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(tui_style(ThemeEntry::Outlier, theme_map))
            .data(&outliers),
    ];
    if !selected.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(tui_style(ThemeEntry::Selected, theme_map))
                .data(&selected),
        );
    }

    let last = app.results.len().saturating_sub(1);
    let mut label_positions = vec![0, last / 2, last];
    label_positions.dedup();
    let x_labels: Vec<String> = label_positions
        .into_iter()
        .filter_map(|i| app.results.get(i).map(|r| r.label.clone()))
        .collect();

    let [y_min, y_max] = y_bounds(app.results.iter().map(|r| r.value));
    let y_labels = vec![
        format!("{:.0}", y_min),
        format!("{:.0}", (y_min + y_max) / 2.0),
        format!("{:.0}", y_max),
    ];

    let axis_style = tui_style(ThemeEntry::Axis, theme_map);
    let chart = Chart::new(datasets)
        .block(rounded_block(" Outliers ").border_style(axis_style))
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title("Sample")
                .style(axis_style)
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn stat_line<'a>(label: &'a str, value: String, theme_map: &ThemeMap) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), tui_style(ThemeEntry::SummaryLabel, theme_map)),
        Span::styled(value, tui_style(ThemeEntry::SummaryValue, theme_map).add_modifier(Modifier::BOLD)),
    ])
}

fn render_panels(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats = app.analysis.statistics();
    let basic = Paragraph::new(vec![
        stat_line("Mean:", format!("{:.2}", stats.mean), theme_map),
        stat_line("Standard deviation:", format!("{:.2}", stats.std_dev), theme_map),
        stat_line("Samples:", app.results.len().to_string(), theme_map),
    ])
    .block(rounded_block(" Basic statistics "));
    f.render_widget(basic, chunks[0]);

    let summary = &app.summary;
    let mut outlier_lines = vec![stat_line(
        "Count:",
        format!("{} ({}%)", summary.count, summary.percentage_label()),
        theme_map,
    )];
    if let Some((min, max)) = summary.range() {
        outlier_lines.push(stat_line("Range:", format!("{} - {}", min, max), theme_map));
    }
    let outlier_panel = Paragraph::new(outlier_lines)
        .block(rounded_block(" Outlier statistics ").border_style(tui_style(ThemeEntry::Outlier, theme_map)));
    f.render_widget(outlier_panel, chunks[1]);

    let selected_lines = match app.selected_result() {
        Some(point) => {
            let (status, entry) = if point.is_outlier {
                (OUTLIER_LABEL, ThemeEntry::Outlier)
            } else {
                (NORMAL_LABEL, ThemeEntry::Normal)
            };
            vec![
                stat_line("Point:", point.label.clone(), theme_map),
                stat_line("Value:", point.value.to_string(), theme_map),
                Line::from(vec![
                    Span::styled(format!("{:<20}", "Z-score:"), tui_style(ThemeEntry::SummaryLabel, theme_map)),
                    Span::styled(format!("{:.2}", point.zscore), tui_style(entry, theme_map).bold()),
                ]),
                Line::from(Span::styled(status, tui_style(entry, theme_map))),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Use ←/→ to select a point",
            tui_style(ThemeEntry::Axis, theme_map),
        ))],
    };
    let selected_panel = Paragraph::new(selected_lines)
        .block(rounded_block(" Selected point ").border_style(tui_style(ThemeEntry::Selected, theme_map)));
    f.render_widget(selected_panel, chunks[2]);
}

fn render_footer(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let mut spans = match app.input_mode {
        InputMode::EditingThreshold => vec![
            Span::styled("Threshold: ", tui_style(ThemeEntry::Warn, theme_map)),
            Span::styled(format!("{}_", app.threshold_input), Style::default().bold()),
            Span::raw("  [Enter] Apply  [Esc] Cancel"),
        ],
        InputMode::Normal => vec![Span::styled(
            threshold_legend(app.threshold.value()),
            tui_style(ThemeEntry::Info, theme_map),
        )],
    };

    if let Some(status) = &app.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.clone(), tui_style(ThemeEntry::Error, theme_map)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(rounded_block("").border_style(tui_style(ThemeEntry::Axis, theme_map)));
    f.render_widget(footer, area);
}
