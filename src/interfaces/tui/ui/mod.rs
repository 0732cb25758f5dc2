mod add_link;
mod analytics_screen;
mod common;
mod detail_panel;
mod exiting;
mod help;
mod links_screen;
pub mod widgets;

pub use add_link::draw_add_link_screen;
pub use analytics_screen::draw_analytics_screen;
pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use detail_panel::draw_detail_panel;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use links_screen::{draw_last_created_panel, draw_links_screen};

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, CurrentScreen, Tab};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_tab {
        Tab::Links => draw_links_tab(frame, app, main_chunks[1]),
        Tab::Analytics => draw_analytics_screen(frame, app, main_chunks[1]),
    }

    // 弹窗覆盖在主内容之上
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::AddLink => draw_add_link_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}

fn draw_links_tab(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    // 状态每次渲染重新计算
    let now = Utc::now();

    let area = if app.show_last_created && app.form.last_created().is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(5)])
            .split(area);
        draw_last_created_panel(frame, app, chunks[0]);
        chunks[1]
    } else {
        area
    };

    if app.show_detail {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        draw_links_screen(frame, app, chunks[0], now);
        draw_detail_panel(frame, app, chunks[1], now);
    } else {
        draw_links_screen(frame, app, area, now);
    }
}
