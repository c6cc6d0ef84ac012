// zscope/src/tui/app.rs
//! Application state for the zscope TUI.
//!
//! Holds the caller-side state the analyzer deliberately does not: the
//! current sample set, threshold, selected point and threshold editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};
use zscope_core::{Analysis, AnalysisError, AnalysisResult, OutlierSummary, SampleSource, Threshold};

/// Whether keystrokes drive the chart or the threshold text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditingThreshold,
}

pub struct App {
    source: Box<dyn SampleSource>,
    pub source_name: String,
    pub analysis: Analysis,
    pub results: Vec<AnalysisResult>,
    pub summary: OutlierSummary,
    pub threshold: Threshold,
    pub selected: Option<usize>,
    pub input_mode: InputMode,
    pub threshold_input: String,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(mut source: Box<dyn SampleSource>, threshold: Threshold) -> Result<Self, AnalysisError> {
        let analysis = Analysis::new(source.samples()?)?;
        let results = analysis.classify(threshold.value());
        let summary = zscope_core::summarize_outliers(&results);

        Ok(Self {
            source_name: source.describe(),
            source,
            analysis,
            results,
            summary,
            threshold,
            selected: None,
            input_mode: InputMode::Normal,
            threshold_input: String::new(),
            status: None,
            should_quit: false,
        })
    }

    /// Draws a new sample set. On failure the previous data stays on screen.
    pub fn regenerate(&mut self) {
        let next = self.source.samples().and_then(Analysis::new);
        match next {
            Ok(analysis) => {
                self.analysis = analysis;
                self.selected = None;
                self.status = None;
                self.reclassify();
            }
            Err(err) => {
                warn!("Regeneration failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn reclassify(&mut self) {
        self.results = self.analysis.classify(self.threshold.value());
        self.summary = zscope_core::summarize_outliers(&self.results);
        debug!("threshold={} outliers={}", self.threshold, self.summary.count);
    }

    pub fn set_threshold(&mut self, threshold: Threshold) {
        self.threshold = threshold;
        self.reclassify();
    }

    pub fn increase_threshold(&mut self) {
        self.set_threshold(self.threshold.step_up());
    }

    pub fn decrease_threshold(&mut self) {
        self.set_threshold(self.threshold.step_down());
    }

    pub fn begin_threshold_edit(&mut self) {
        self.threshold_input = self.threshold.to_string();
        self.input_mode = InputMode::EditingThreshold;
        self.status = None;
    }

    pub fn cancel_threshold_edit(&mut self) {
        self.threshold_input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Applies the typed threshold. Invalid text keeps the old threshold and
    /// leaves the editor open with an error message.
    pub fn commit_threshold_edit(&mut self) {
        match self.threshold_input.parse::<Threshold>() {
            Ok(threshold) => {
                self.set_threshold(threshold);
                self.cancel_threshold_edit();
                self.status = None;
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.results.len();
        if len == 0 { return; }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.results.len();
        if len == 0 { return; }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_result(&self) -> Option<&AnalysisResult> {
        self.selected.and_then(|i| self.results.get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.regenerate(),
                KeyCode::Char('+') | KeyCode::Char('=') => self.increase_threshold(),
                KeyCode::Char('-') | KeyCode::Char('_') => self.decrease_threshold(),
                KeyCode::Char('t') => self.begin_threshold_edit(),
                KeyCode::Right | KeyCode::Char('l') => self.select_next(),
                KeyCode::Left | KeyCode::Char('h') => self.select_previous(),
                KeyCode::Esc => self.clear_selection(),
                _ => {}
            },
            InputMode::EditingThreshold => match key.code {
                KeyCode::Enter => self.commit_threshold_edit(),
                KeyCode::Esc => {
                    self.cancel_threshold_edit();
                    self.status = None;
                }
                KeyCode::Backspace => {
                    self.threshold_input.pop();
                }
                KeyCode::Char(c) if !c.is_control() => self.threshold_input.push(c),
                _ => {}
            },
        }
    }
}
