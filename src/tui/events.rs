//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard input into app state
//! mutations. Printable keys edit the input line; Enter submits it for
//! identification; Esc and Ctrl+C quit.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit, even while the help overlay is open

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (Esc or Ctrl+C).
    Quit,
    /// User pressed Enter: submit the current input text.
    Submit,
    /// A printable character to append to the input line.
    Char(char),
    /// Remove the last input character.
    Backspace,
    /// Clear the whole input line (Ctrl+U).
    ClearLine,
    /// Toggle the help overlay (F1).
    Help,
    /// Scroll the log up one entry.
    ScrollUp,
    /// Scroll the log down one entry.
    ScrollDown,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// # Arguments
/// * `timeout` - Maximum time to wait for an event.
///
/// # Returns
/// The detected `InputEvent`, or `InputEvent::None` if no event occurred.
/// Any crossterm polling error also yields `InputEvent::None` (never panics).
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) => translate_key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
///
/// # Arguments
/// * `app` - Mutable reference to app state.
/// * `event` - The input event to apply.
///
/// # Returns
/// `Some(text)` when the event submits the current input for identification
/// (the caller dispatches it); `None` otherwise. Submission does not clear
/// the input line, so the user can refine and resubmit.
pub fn apply_event(app: &mut App, event: InputEvent) -> Option<String> {
    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Submit => {
            if app.show_help {
                app.show_help = false;
            } else {
                // No pre-validation, empty included: the service decides
                // what constitutes valid input.
                return Some(app.input_text.clone());
            }
        }
        InputEvent::Char(c) => {
            if !app.show_help {
                app.push_input(c);
            }
        }
        InputEvent::Backspace => {
            if !app.show_help {
                app.pop_input();
            }
        }
        InputEvent::ClearLine => {
            if !app.show_help {
                app.clear_input();
            }
        }
        InputEvent::Help => app.show_help = !app.show_help,
        InputEvent::ScrollUp => app.scroll_log_up(),
        InputEvent::ScrollDown => app.scroll_log_down(),
        InputEvent::Resize(_, _) | InputEvent::None => {}
    }
    None
}

/// Translates a crossterm key event to an `InputEvent`.
fn translate_key(key: KeyEvent) -> InputEvent {
    // Ctrl chords first so Ctrl+C/U never fall through to text input
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputEvent::Quit,
            KeyCode::Char('u') => InputEvent::ClearLine,
            _ => InputEvent::None,
        };
    }

    match key.code {
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::F(1) => InputEvent::Help,
        KeyCode::Up => InputEvent::ScrollUp,
        KeyCode::Down => InputEvent::ScrollDown,
        KeyCode::Char(c) => InputEvent::Char(c),
        _ => InputEvent::None,
    }
}
