use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::interfaces::tui::app::{App, CurrentScreen, Tab, ToastKind};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with the tab strip
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.as_ref())))
        .collect();
    let selected = Tab::iter().position(|tab| tab == app.current_tab).unwrap_or(0);

    let block_title = Line::from(vec![
        Span::styled(" LinkShort", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ]);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::PRIMARY)
                .bold(),
        )
        .divider(Span::styled("|", Style::default().fg(colors::MUTED)))
        .block(
            Block::default()
                .title(block_title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        );

    frame.render_widget(tabs, area);
}

/// Draw status bar with the latest toast
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = match app.toasts.current() {
        Some(toast) => match toast.kind {
            ToastKind::Error => (
                format!("[ERROR] {}", toast.message),
                Style::default().fg(Color::White).bg(colors::ERROR).bold(),
            ),
            ToastKind::Success => (
                format!("[SUCCESS] {}", toast.message),
                Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
            ),
            ToastKind::Info => (
                format!("[INFO] {}", toast.message),
                Style::default().fg(colors::PRIMARY).bold(),
            ),
        },
        None if app.form.submitting => (
            "Creating short link...".to_string(),
            Style::default().fg(colors::WARNING),
        ),
        None => ("Ready".to_string(), Style::default().fg(colors::PRIMARY)),
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match (app.current_screen, app.current_tab) {
        (CurrentScreen::Main, Tab::Links) => vec![
            ("j/k", "Navigate", Color::Cyan),
            ("v", "Details", Color::Cyan),
            ("a", "Add", Color::Green),
            ("y", "Copy", Color::Yellow),
            ("c", "Analytics", Color::Magenta),
            ("r", "Refresh", Color::Cyan),
            ("Tab", "Switch", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        (CurrentScreen::Main, Tab::Analytics) => vec![
            ("h/l", "Section", Color::Cyan),
            ("g", "All Links", Color::Cyan),
            ("r", "Refresh", Color::Cyan),
            ("Tab", "Switch", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        (CurrentScreen::AddLink, _) => vec![
            ("Tab", "Next Field", Color::Cyan),
            ("Enter", "Create", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        (CurrentScreen::Exiting, _) => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        (CurrentScreen::Help, _) => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
