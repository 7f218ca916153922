//! Interactive TUI interface
//!
//! Ratatui-based game mode: board tiles, countdown gauge, live input, and the
//! post-round missed-word report.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
