//! # Module: TUI Widgets
//!
//! One renderer per screen region: the input line, the two similarity chart
//! panels, the top-language status line, and the log tail. Each renderer is
//! a free function taking the frame, its allocated area, and the app state.

pub mod chart;
pub mod input;
pub mod log;
pub mod status;
