//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns all client state and provides the result-presentation logic. The
//! `App` struct is the single source of truth for every widget's data:
//! input text, the two chart slots, the derived top language, request
//! sequencing, and the diagnostic log tail. State transitions are
//! deterministic and testable in isolation.
//!
//! ## Guarantees
//! - Each chart panel is created at most once per session and thereafter
//!   only mutated in place; its identity is stable across presentations
//! - Only the most recently dispatched request can affect visible state;
//!   stale completions are discarded
//! - Failures never mutate chart or top-language state
//! - The log `VecDeque` is bounded and never grows past capacity

use std::collections::VecDeque;

use crate::dataset::{percent_label, reshape, ChartDataset};
use crate::{IdentificationResult, LensError};

/// Maximum number of log entries retained for display.
pub const LOG_ENTRIES_CAP: usize = 50;

/// Minimum terminal width for the client to render.
pub const MIN_COLS: u16 = 80;

/// Minimum terminal height for the client to render.
pub const MIN_ROWS: u16 = 24;

/// Title of the languages chart panel, fixed at creation.
pub const LANGUAGES_TITLE: &str = "Most similar languages";

/// Title of the articles chart panel, fixed at creation.
pub const ARTICLES_TITLE: &str = "Most similar articles";

/// Label of the single data series every panel carries.
pub const SERIES_LABEL: &str = "Similarity (%)";

/// Retained state of one chart: fixed title and series label, mutable
/// labels/values, and a numeric identity assigned at creation.
///
/// Constructed only through [`ChartSlot::create_or_update`]; thereafter the
/// same panel is mutated in place on every subsequent result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    id: u64,
    title: &'static str,
    dataset: ChartDataset,
}

impl ChartPanel {
    /// Stable identity, unique per session. Two presentations that reuse a
    /// panel observe the same id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The panel title, never altered after creation.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Current bar labels in rank order.
    pub fn labels(&self) -> &[String] {
        &self.dataset.labels
    }

    /// Current bar values (percentages) in rank order.
    pub fn values(&self) -> &[f64] {
        &self.dataset.values
    }

    /// Replaces the panel's labels and values in place. Title and identity
    /// are untouched.
    fn apply(&mut self, dataset: ChartDataset) {
        self.dataset = dataset;
    }
}

/// Per-category chart state: explicitly empty until the first successful
/// result, occupied forever after. There is no teardown transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSlot {
    /// No result has been presented for this category yet.
    Empty,
    /// The category's one panel, created on the first successful result.
    Occupied(ChartPanel),
}

impl ChartSlot {
    /// The panel, if one has been created.
    pub fn panel(&self) -> Option<&ChartPanel> {
        match self {
            Self::Empty => None,
            Self::Occupied(panel) => Some(panel),
        }
    }

    /// Applies the create-or-update policy: an empty slot gains a new panel
    /// with the given title; an occupied slot has its data replaced in place.
    fn create_or_update(&mut self, title: &'static str, dataset: ChartDataset, next_id: &mut u64) {
        match self {
            Self::Empty => {
                let id = *next_id;
                *next_id += 1;
                *self = Self::Occupied(ChartPanel { id, title, dataset });
            }
            Self::Occupied(panel) => panel.apply(dataset),
        }
    }
}

/// The currently selected top-ranked language, derived from the latest
/// result with a non-empty `languages` sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TopLanguage {
    /// Language name of the best match.
    pub name: String,
    /// Its similarity as a percentage.
    pub percent: f64,
}

impl TopLanguage {
    /// Display form, e.g. `"French (87.0%)"`.
    pub fn display(&self) -> String {
        format!("{} ({}%)", self.name, percent_label(self.percent))
    }
}

/// A single log entry for the log tail widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Formatted timestamp string, e.g. "14:32:01".
    pub timestamp: String,
    /// Severity level.
    pub level: LogLevel,
    /// Primary log message.
    pub message: String,
    /// Structured fields as a formatted string.
    pub fields: String,
}

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning condition.
    Warn,
    /// Error condition.
    Error,
    /// Debug-level message.
    Debug,
}

impl LogLevel {
    /// Returns the display label for this log level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

/// Primary application state for the TUI client.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current input text, edited in place by key events.
    pub input_text: String,

    /// Chart state for the `languages` category.
    pub languages_chart: ChartSlot,
    /// Chart state for the `articles` category.
    pub articles_chart: ChartSlot,
    /// Top-ranked language of the latest result, unset before any result.
    pub top_language: Option<TopLanguage>,

    /// Sequence number of the most recently dispatched request (0 = none).
    dispatched_seq: u64,
    /// Sequence number of the request currently awaited, if any.
    in_flight: Option<u64>,

    /// Rolling log entries, newest at the back.
    pub log_entries: VecDeque<LogEntry>,
    /// Lines scrolled up from the newest entry.
    pub log_scroll_offset: usize,

    /// Next chart panel identity.
    next_panel_id: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` with empty state.
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_help: false,
            input_text: String::new(),
            languages_chart: ChartSlot::Empty,
            articles_chart: ChartSlot::Empty,
            top_language: None,
            dispatched_seq: 0,
            in_flight: None,
            log_entries: VecDeque::with_capacity(LOG_ENTRIES_CAP),
            log_scroll_offset: 0,
            next_panel_id: 0,
        }
    }

    // ── Input editing ────────────────────────────────────────────────

    /// Appends a character to the input text.
    pub fn push_input(&mut self, c: char) {
        self.input_text.push(c);
    }

    /// Removes the last character of the input text, if any.
    pub fn pop_input(&mut self) {
        self.input_text.pop();
    }

    /// Clears the input text.
    pub fn clear_input(&mut self) {
        self.input_text.clear();
    }

    // ── Request sequencing ───────────────────────────────────────────

    /// Registers a new dispatch and returns its sequence number.
    ///
    /// A newer dispatch supersedes any outstanding one: the older request is
    /// not cancelled, but its eventual completion will be discarded.
    pub fn begin_identify(&mut self) -> u64 {
        self.dispatched_seq += 1;
        self.in_flight = Some(self.dispatched_seq);
        self.dispatched_seq
    }

    /// Whether a request is currently awaited.
    pub fn is_identifying(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Routes the outcome of a dispatched request.
    ///
    /// Only the most recently dispatched request may affect visible state;
    /// completions carrying an older sequence number are discarded with a
    /// debug log entry. Failures of the latest request are logged and leave
    /// charts and top language untouched.
    ///
    /// # Returns
    /// `true` if the outcome was a success that was presented, `false` if it
    /// was stale or a failure.
    pub fn complete_identify(
        &mut self,
        seq: u64,
        outcome: Result<IdentificationResult, LensError>,
    ) -> bool {
        if seq != self.dispatched_seq {
            self.log(
                LogLevel::Debug,
                "Stale result discarded",
                format!("seq={} latest={}", seq, self.dispatched_seq),
            );
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.log(
                    LogLevel::Info,
                    "Identification complete",
                    format!(
                        "languages={} articles={}",
                        result.languages.len(),
                        result.articles.len()
                    ),
                );
                self.present(result);
                true
            }
            Err(err) => {
                // Deliberately silent to the user: diagnostics only, no UI
                // mutation, charts remain in their prior state.
                let level = match err {
                    LensError::Decode(_) => LogLevel::Warn,
                    _ => LogLevel::Error,
                };
                self.log(level, "Identification failed", err.to_string());
                false
            }
        }
    }

    // ── Presentation ─────────────────────────────────────────────────

    /// Presents a decoded result: reshapes both categories and reconciles
    /// them against the chart slots.
    ///
    /// The top language follows `languages[0]` when the sequence is
    /// non-empty; an empty sequence keeps the previous value.
    pub fn present(&mut self, result: IdentificationResult) {
        let languages = reshape(&result.languages);
        let articles = reshape(&result.articles);

        if let Some(best) = result.languages.first() {
            self.top_language = Some(TopLanguage {
                name: best.name.clone(),
                percent: best.similarity * 100.0,
            });
        }

        self.languages_chart
            .create_or_update(LANGUAGES_TITLE, languages, &mut self.next_panel_id);
        self.articles_chart
            .create_or_update(ARTICLES_TITLE, articles, &mut self.next_panel_id);
    }

    // ── Diagnostics ──────────────────────────────────────────────────

    /// Pushes a log entry, evicting the oldest if at capacity.
    pub fn push_log(&mut self, entry: LogEntry) {
        if self.log_entries.len() >= LOG_ENTRIES_CAP {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }

    /// Convenience wrapper around [`Self::push_log`] with a wall-clock
    /// timestamp.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>, fields: impl Into<String>) {
        self.push_log(LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.into(),
            fields: fields.into(),
        });
    }

    /// Scrolls the log view up by one entry, bounded by history size.
    pub fn scroll_log_up(&mut self) {
        if self.log_scroll_offset + 1 < self.log_entries.len() {
            self.log_scroll_offset += 1;
        }
    }

    /// Scrolls the log view down by one entry, bounded at the newest.
    pub fn scroll_log_down(&mut self) {
        self.log_scroll_offset = self.log_scroll_offset.saturating_sub(1);
    }
}
