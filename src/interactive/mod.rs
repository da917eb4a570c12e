//! Full-screen terminal interface
//!
//! The same game as the console mode, drawn with ratatui.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
