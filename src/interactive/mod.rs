//! Interactive TUI interface
//!
//! A ratatui front end over the same intent dispatch the console uses.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
