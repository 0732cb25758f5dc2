use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Navigate list"),
            ("Home, g", "Jump to top"),
            ("End, G", "Jump to bottom"),
            ("PageUp/PageDown", "Scroll 10 items"),
            ("Tab, 1, 2", "Switch between Links and Analytics"),
        ],
    ),
    (
        "LINKS",
        &[
            ("a", "Create a short link"),
            ("Enter, v", "Toggle detail panel"),
            ("y", "Copy selected short URL"),
            ("u", "Copy selected original URL"),
            ("Y", "Copy the link you just created"),
            ("x", "Dismiss the \"Your Short Link\" panel"),
            ("c", "Analytics for selected link"),
            ("r", "Refresh"),
        ],
    ),
    (
        "ANALYTICS",
        &[
            ("h/l, Left/Right", "Switch section"),
            ("g", "Back to all links"),
            ("r", "Refresh"),
        ],
    ),
    (
        "GENERAL",
        &[("?", "Show this help"), ("q, Esc", "Quit"), ("Ctrl+C", "Quit immediately")],
    ),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut help_text = Vec::new();
    for (title, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(colors::PRIMARY)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        help_text.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
