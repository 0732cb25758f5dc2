//! Mode routing
//!
//! - CLI mode (one command, then exit)
//! - TUI mode (interactive terminal UI)

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug)]
pub enum Mode {
    Cli(Commands),
    #[cfg(feature = "tui")]
    Tui,
    /// No subcommand given
    Help,
}

impl Mode {
    /// TUI 独占终端，日志不能写到 stdout
    pub fn is_interactive(&self) -> bool {
        #[cfg(feature = "tui")]
        if matches!(self, Mode::Tui) {
            return true;
        }
        false
    }
}

/// Detect which mode to run based on the parsed subcommand
pub fn detect_mode(command: Option<Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => Mode::Tui,
        Some(cmd) => Mode::Cli(cmd),
        None => Mode::Help,
    }
}
