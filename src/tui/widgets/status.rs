//! # Widget: Top Language Status
//!
//! ## Responsibility
//! Renders the derived top-ranked language of the latest result as a single
//! summary line, or a dim hint before any result has arrived.
//!
//! ## Guarantees
//! - Never panics whether or not a result has been presented

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;

/// Renders the status line widget.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Rectangular area allocated for this widget.
/// * `app` - Application state containing the top language.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = match &app.top_language {
        Some(top) => Line::from(vec![
            Span::styled("detected language: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                top.display(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "type some text and press Enter to identify its language",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use crate::tui::app::{App, TopLanguage};

    #[test]
    fn test_status_text_before_result() {
        let app = App::new();
        assert!(app.top_language.is_none());
    }

    #[test]
    fn test_status_text_after_result() {
        let mut app = App::new();
        app.top_language = Some(TopLanguage {
            name: "fr".to_string(),
            percent: 87.0,
        });
        assert_eq!(app.top_language.as_ref().map(|t| t.display()).as_deref(), Some("fr (87.0%)"));
    }
}
