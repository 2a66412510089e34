//! # Widget: Log Tail
//!
//! ## Responsibility
//! Renders the last N log entries with color-coded severity levels.
//! INFO=white, WARN=yellow, ERROR=red, DEBUG=gray. This is the only place
//! identify failures surface; the charts themselves stay silent.
//!
//! ## Guarantees
//! - Fixed-width timestamp column for alignment
//! - Long lines truncated with `…` rather than wrapping
//! - Handles empty log list gracefully
//! - Newest entries appear at the bottom; Up/Down scrolls through history

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, LogEntry, LogLevel};

/// Returns the display color for a log level.
///
/// # Returns
/// White for Info, Yellow for Warn, Red for Error, DarkGray for Debug.
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::White,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Debug => Color::DarkGray,
    }
}

/// Truncates a string to a maximum width, adding `…` if truncated.
///
/// # Arguments
/// * `s` - The string to potentially truncate.
/// * `max_width` - Maximum character width.
///
/// # Returns
/// The string unchanged if it fits, or truncated with trailing `…`.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "\u{2026}".to_string();
    }
    let head: String = s.chars().take(max_width - 1).collect();
    format!("{head}\u{2026}")
}

/// Renders the log tail widget.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Rectangular area allocated for this widget.
/// * `app` - Application state containing log entries and scroll offset.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.log_scroll_offset > 0 {
        format!(" LOG (↑{}) ", app.log_scroll_offset)
    } else {
        " LOG ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible_count = inner.height as usize;
    let max_line_width = inner.width as usize;

    let entries: Vec<&LogEntry> = app
        .log_entries
        .iter()
        .rev()
        .skip(app.log_scroll_offset)
        .take(visible_count)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let color = level_color(entry.level);
            let prefix = format!("[{}] {}  ", entry.timestamp, entry.level.label());

            let remaining_width = max_line_width.saturating_sub(prefix.len());
            let body = if entry.fields.is_empty() {
                entry.message.clone()
            } else {
                format!("{:<26} {}", entry.message, entry.fields)
            };
            let truncated_body = truncate_with_ellipsis(&body, remaining_width);

            Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}  ", entry.level.label()),
                    Style::default().fg(color),
                ),
                Span::styled(truncated_body, Style::default().fg(color)),
            ])
        })
        .collect();

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_color_info_white() {
        assert_eq!(level_color(LogLevel::Info), Color::White);
    }

    #[test]
    fn test_level_color_warn_yellow() {
        assert_eq!(level_color(LogLevel::Warn), Color::Yellow);
    }

    #[test]
    fn test_level_color_error_red() {
        assert_eq!(level_color(LogLevel::Error), Color::Red);
    }

    #[test]
    fn test_level_color_debug_gray() {
        assert_eq!(level_color(LogLevel::Debug), Color::DarkGray);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello\u{2026}");
    }

    #[test]
    fn test_truncate_width_one() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "\u{2026}");
    }

    #[test]
    fn test_truncate_width_zero() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_truncate_empty_string() {
        assert_eq!(truncate_with_ellipsis("", 10), "");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        // Must not split inside a multi-byte character
        assert_eq!(truncate_with_ellipsis("héllo wörld", 6), "héllo\u{2026}");
    }
}
