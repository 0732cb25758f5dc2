//! User interfaces (CLI, TUI)

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
