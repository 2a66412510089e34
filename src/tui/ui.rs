//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Orchestrates the overall layout by dividing the terminal into regions and
//! delegating to individual widget renderers: input line on top, the two
//! chart panels side by side, the top-language status line, and the log tail.
//! Handles the minimum size guard and help overlay.
//!
//! ## Guarantees
//! - Layout adapts gracefully to terminal sizes from 80x24 upward
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, MIN_COLS, MIN_ROWS};
use super::widgets;

/// Renders the complete client UI into the given frame.
///
/// # Arguments
/// * `f` - The Ratatui frame to render into.
/// * `app` - The application state to display.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Minimum size guard
    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    // Help overlay
    if app.show_help {
        draw_help_overlay(f, size);
        return;
    }

    // Title bar
    let title = format!(
        " lingualens {:>width$} ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        width = (size.width as usize).saturating_sub(14),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);

    // Main layout: input, status, charts, log
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input line
            Constraint::Length(3), // Top-language status
            Constraint::Min(8),    // Chart panels
            Constraint::Length(8), // Log tail
        ])
        .split(inner);

    // Charts: languages left, articles right
    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    widgets::input::render(f, main_chunks[0], app);
    widgets::status::render(f, main_chunks[1], app);
    widgets::chart::render(f, chart_chunks[0], &app.languages_chart, "LANGUAGES");
    widgets::chart::render(f, chart_chunks[1], &app.articles_chart, "ARTICLES");
    widgets::log::render(f, main_chunks[3], app);
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small \u{2014} resize to at least {}x{}",
        MIN_COLS, MIN_ROWS
    );
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    // Center the help popup
    let popup_width = 52.min(area.width.saturating_sub(4));
    let popup_height = 14.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  lingualens",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Keybindings:",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "    [Enter]   Identify the typed text",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [Ctrl+U]  Clear the input line",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [↑↓]      Scroll the log",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [F1]      Toggle this help",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "    [Esc] / [Ctrl+C]  Quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────────",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  --mock  Canned responses, no service needed",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  Press Enter or F1 to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let para = Paragraph::new(help_text).block(block);
    f.render_widget(para, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size_constants() {
        assert_eq!(MIN_COLS, 80);
        assert_eq!(MIN_ROWS, 24);
    }

    #[test]
    fn test_too_small_detection_width() {
        let area = Rect::new(0, 0, 60, 30);
        assert!(area.width < MIN_COLS);
    }

    #[test]
    fn test_too_small_detection_height() {
        let area = Rect::new(0, 0, 100, 20);
        assert!(area.height < MIN_ROWS);
    }

    #[test]
    fn test_exactly_minimum_size_is_adequate() {
        let area = Rect::new(0, 0, MIN_COLS, MIN_ROWS);
        assert!(area.width >= MIN_COLS && area.height >= MIN_ROWS);
    }

    #[test]
    fn test_popup_centering_calculation() {
        let area_width: u16 = 120;
        let area_height: u16 = 40;
        let popup_width = 52.min(area_width.saturating_sub(4));
        let popup_height = 14.min(area_height.saturating_sub(4));
        let popup_x = (area_width.saturating_sub(popup_width)) / 2;
        let popup_y = (area_height.saturating_sub(popup_height)) / 2;

        assert_eq!(popup_width, 52);
        assert_eq!(popup_height, 14);
        assert_eq!(popup_x, 34);
        assert_eq!(popup_y, 13);
    }

    #[test]
    fn test_popup_centering_small_terminal() {
        let area_width: u16 = 40;
        let area_height: u16 = 12;
        let popup_width = 52.min(area_width.saturating_sub(4));
        let popup_height = 14.min(area_height.saturating_sub(4));

        assert_eq!(popup_width, 36);
        assert_eq!(popup_height, 8);
    }
}
