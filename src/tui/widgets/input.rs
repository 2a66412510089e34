//! # Widget: Input Line
//!
//! ## Responsibility
//! Renders the text being composed, a block cursor, and an in-flight
//! indicator while an identification is outstanding.
//!
//! ## Guarantees
//! - Long input is windowed to the rightmost visible portion, cursor included
//! - Never panics on any input length or area width

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;

/// Returns the rightmost window of `text` that fits `width` columns,
/// reserving one column for the cursor.
pub fn visible_tail(text: &str, width: usize) -> String {
    if width <= 1 {
        return String::new();
    }
    let budget = width - 1;
    let count = text.chars().count();
    if count <= budget {
        return text.to_string();
    }
    text.chars().skip(count - budget).collect()
}

/// Renders the input line widget.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Rectangular area allocated for this widget.
/// * `app` - Application state containing the input text.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.is_identifying() {
        Span::styled(
            " INPUT TEXT — identifying… ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " INPUT TEXT ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .title(title)
        .title_bottom(Span::styled(
            " [Enter] identify  [Ctrl+U] clear  [F1] help ",
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let shown = visible_tail(&app.input_text, inner.width as usize);
    let line = Line::from(vec![
        Span::styled(shown, Style::default().fg(Color::White)),
        Span::styled("\u{258c}", Style::default().fg(Color::Cyan)),
    ]);

    f.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_short_input_unchanged() {
        assert_eq!(visible_tail("hello", 20), "hello");
    }

    #[test]
    fn test_visible_tail_exact_budget() {
        // width 6 leaves a budget of 5 for text
        assert_eq!(visible_tail("hello", 6), "hello");
    }

    #[test]
    fn test_visible_tail_windows_rightmost() {
        assert_eq!(visible_tail("hello world", 6), "world");
    }

    #[test]
    fn test_visible_tail_width_one_is_empty() {
        assert_eq!(visible_tail("hello", 1), "");
    }

    #[test]
    fn test_visible_tail_width_zero_is_empty() {
        assert_eq!(visible_tail("hello", 0), "");
    }

    #[test]
    fn test_visible_tail_empty_input() {
        assert_eq!(visible_tail("", 10), "");
    }

    #[test]
    fn test_visible_tail_multibyte() {
        assert_eq!(visible_tail("héllo wörld", 6), "wörld");
    }
}
