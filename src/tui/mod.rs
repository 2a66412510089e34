//! # Module: TUI Client
//!
//! ## Responsibility
//! Provides the terminal interface for lingualens: an input line, two
//! horizontal bar chart panels (most similar languages / articles), a
//! top-language status line, and a log tail for diagnostics.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic
//! - Graceful resize handling down to 80x24 minimum
//! - The UI thread never blocks on the network; identify calls complete
//!   through a channel drained each frame
//!
//! ## NOT Responsible For
//! - Talking to the identification service (delegates to `service`)
//! - Reshaping payloads (delegates to `dataset`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
