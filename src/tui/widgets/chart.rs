//! # Widget: Similarity Bar Charts
//!
//! ## Responsibility
//! Renders one chart panel as labeled horizontal bars using Unicode block
//! characters: label column, fill bar, percentage column. Bars appear in
//! rank order, best match at the top. An empty slot renders a placeholder;
//! an empty dataset renders a panel with no bars.
//!
//! ## Guarantees
//! - Bars render correctly at 0%, 50%, and 100%
//! - Never panics on any percentage, including out-of-range values
//! - Rows that do not fit the area are dropped from the bottom, never wrapped

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::dataset::percent_label;
use crate::tui::app::{ChartSlot, SERIES_LABEL};
use crate::tui::widgets::log::truncate_with_ellipsis;

/// Character width of the label column.
const LABEL_WIDTH: usize = 14;

/// Minimum bar width; narrower areas drop the bar entirely.
const MIN_BAR_WIDTH: usize = 4;

/// Returns the color for a similarity percentage.
///
/// Strong matches (>=50%) render cyan, weak but visible ones (>=10%) blue,
/// the rest dark gray.
pub fn bar_color(percent: f64) -> Color {
    if percent >= 50.0 {
        Color::Cyan
    } else if percent >= 10.0 {
        Color::Blue
    } else {
        Color::DarkGray
    }
}

/// Builds a fill bar string for a percentage.
///
/// # Arguments
/// * `percent` - Similarity percentage; values outside `[0, 100]` are clamped.
/// * `width` - Total bar width in characters.
///
/// # Returns
/// String with `\u{2588}` (filled) and `\u{2591}` (empty) characters.
pub fn similarity_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(empty))
}

/// Renders one chart slot into the given area.
///
/// # Arguments
/// * `f` - Ratatui frame to render into.
/// * `area` - Rectangular area allocated for this panel.
/// * `slot` - The chart slot to display.
/// * `placeholder` - Region name shown while the slot is still empty.
pub fn render(f: &mut Frame, area: Rect, slot: &ChartSlot, placeholder: &str) {
    let panel = match slot.panel() {
        Some(panel) => panel,
        None => {
            render_placeholder(f, area, placeholder);
            return;
        }
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", panel.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} ", SERIES_LABEL),
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = (inner.width as usize)
        .saturating_sub(LABEL_WIDTH + 2 + 7) // brackets + " 100% " column
        .max(MIN_BAR_WIDTH);

    let mut lines = Vec::new();
    for (label, &value) in panel.labels().iter().zip(panel.values()) {
        if lines.len() >= inner.height as usize {
            break;
        }
        let color = bar_color(value);
        let bar = similarity_bar(value, bar_width);
        let name = truncate_with_ellipsis(label, LABEL_WIDTH);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", name, width = LABEL_WIDTH),
                Style::default().fg(Color::White),
            ),
            Span::raw("["),
            Span::styled(bar, Style::default().fg(color)),
            Span::raw("] "),
            Span::styled(
                format!("{:>4}%", percent_label(value)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

/// Renders the pre-first-result placeholder for a region.
fn render_placeholder(f: &mut Frame, area: Rect, placeholder: &str) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", placeholder),
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let para = Paragraph::new(Line::from(Span::styled(
        "no identification yet",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(para, inner);
}
