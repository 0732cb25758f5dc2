//! Event handling for TUI
//!
//! - main_screen: Links / Analytics tabs
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::handle_add_link_input;

mod main_screen;
mod misc_screens;

use main_screen::handle_main_screen;
use misc_screens::{handle_exiting_screen, handle_help_screen};

/// Handle keyboard input based on current screen, returns `true` to exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key.code),
        CurrentScreen::AddLink => {
            handle_add_link_input(app, key.code);
            false
        }
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
