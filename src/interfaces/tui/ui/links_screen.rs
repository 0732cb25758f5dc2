use std::sync::Arc;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState, Wrap},
};

use crate::cache::ViewState;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::interfaces::tui::ui::widgets::StatusIndicator;
use crate::models::Link;
use crate::utils::{format_count, truncate_chars};

fn links_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
}

fn draw_message(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let mut text = vec![Line::from(""), Line::from("")];
    text.extend(lines);
    let paragraph = Paragraph::new(text)
        .block(links_block(title.to_string()).border_style(Style::default().fg(colors::MUTED)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn key_hint(prefix: &'static str, key: &'static str, suffix: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(prefix, Style::default().fg(colors::MUTED)),
        Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(suffix, Style::default().fg(colors::MUTED)),
    ])
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    draw_message(
        frame,
        area,
        "Short Links (0)",
        vec![
            Line::from(Span::styled(
                "No short links yet",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            key_hint("Press ", "[a]", " to create your first link", colors::SUCCESS),
        ],
    );
}

pub fn draw_links_screen(frame: &mut Frame, app: &mut App, area: Rect, now: DateTime<Utc>) {
    match app.links_view.clone() {
        ViewState::Loading => draw_message(
            frame,
            area,
            "Short Links",
            vec![Line::from(Span::styled(
                "Loading links...",
                Style::default().fg(colors::WARNING),
            ))],
        ),
        ViewState::Empty { .. } => draw_empty(frame, area),
        ViewState::Error {
            message,
            stale: None,
        } => draw_message(
            frame,
            area,
            "Short Links",
            vec![
                Line::from(Span::styled(
                    "Failed to load links",
                    Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(message, Style::default().fg(colors::MUTED))),
                Line::from(""),
                key_hint("Press ", "[r]", " to retry", colors::WARNING),
            ],
        ),
        ViewState::Error {
            message,
            stale: Some(links),
        } => {
            // 旧数据照常显示，但标明不是最新的
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(area);
            let banner = Paragraph::new(format!(
                " Showing cached links, refresh failed: {} ",
                message
            ))
            .style(Style::default().fg(Color::White).bg(colors::ERROR));
            frame.render_widget(banner, chunks[0]);
            if links.is_empty() {
                draw_empty(frame, chunks[1]);
            } else {
                draw_table(frame, app, chunks[1], &links, now, "stale");
            }
        }
        ViewState::Ready { value, validating } => {
            let note = if validating { "refreshing" } else { "" };
            draw_table(frame, app, area, &value, now, note);
        }
    }
}

fn draw_table(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    links: &Arc<Vec<Link>>,
    now: DateTime<Utc>,
    note: &str,
) {
    let total = links.len();

    // border 2 行 + header 1 行 + header margin 1 行
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);
    app.adjust_scroll_offset();

    let offset = app.scroll_offset.min(total.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total);

    let header_style = Style::default()
        .fg(colors::WARNING)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Span::styled("Code", header_style),
        Span::styled("URL", header_style),
        Span::styled("Clicks", header_style),
        Span::styled("Status", header_style),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = links[offset..end]
        .iter()
        .map(|link| {
            let indicator = StatusIndicator::new(link, now);
            Row::new(vec![
                Span::styled(
                    format!("/{}", link.short_code),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate_chars(&link.original_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(format_count(link.clicks), Style::default().fg(colors::SUCCESS)),
                Span::styled(indicator.text(), indicator.style()),
            ])
        })
        .collect();

    let title = if note.is_empty() {
        format!("Short Links ({})", total)
    } else {
        format!("Short Links ({}) | {}", total, note)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(16), // Code
            Constraint::Min(20),    // URL
            Constraint::Length(8),  // Clicks
            Constraint::Length(9),  // Status
        ],
    )
    .header(header)
    .block(links_block(title))
    .row_highlight_style(Style::default().bg(colors::MUTED).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 选中行换算为可见窗口内的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}

/// "Your Short Link" 面板，直到下一次成功创建或手动关闭前一直显示
pub fn draw_last_created_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(created) = app.form.last_created() else {
        return;
    };

    let text = vec![
        Line::from(vec![
            Span::styled("Short URL: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                created.short_url.clone(),
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![
            Span::styled("Code:      ", Style::default().fg(colors::MUTED)),
            Span::styled(
                format!("/{}", created.short_code),
                Style::default().fg(colors::PRIMARY),
            ),
        ]),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(colors::WARNING).bold()),
            Span::styled(" copy  ", Style::default().fg(colors::MUTED)),
            Span::styled("[x]", Style::default().fg(colors::WARNING).bold()),
            Span::styled(" dismiss", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let panel = Paragraph::new(text).block(
        Block::default()
            .title("Your Short Link")
            .title_style(Style::default().fg(colors::SUCCESS).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::SUCCESS)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;
    use crate::services::ServiceContext;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| draw_links_screen(frame, app, frame.area(), Utc::now()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let config = AppConfig::default();
        App::new(ServiceContext::from_config(&config), &config)
    }

    #[test]
    fn test_stale_empty_list_reads_as_empty() {
        let mut app = app();
        app.links_view = ViewState::Error {
            message: "timeout".to_string(),
            stale: Some(Arc::new(Vec::new())),
        };

        let screen = render(&mut app);
        assert!(screen.contains("Showing cached links, refresh failed: timeout"));
        assert!(screen.contains("No short links yet"));
    }

    #[test]
    fn test_error_without_stale_value() {
        let mut app = app();
        app.links_view = ViewState::Error {
            message: "timeout".to_string(),
            stale: None,
        };

        let screen = render(&mut app);
        assert!(screen.contains("Failed to load links"));
        assert!(!screen.contains("No short links yet"));
    }
}
