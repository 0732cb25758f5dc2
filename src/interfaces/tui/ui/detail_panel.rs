//! Detail panel for the selected link

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::cache::ViewState;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::widgets::StatusIndicator;
use crate::models::Link;
use crate::utils::TimeParser;

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(colors::MUTED))
}

/// 优先展示单条链接接口返回的最新数据，未就绪时退回列表中的数据
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Utc>) {
    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));

    let (link, note): (Option<Link>, Option<Line>) = match &app.detail_view {
        Some(ViewState::Ready { value, .. }) => (Some(value.as_ref().clone()), None),
        Some(ViewState::Error { message, stale }) => (
            stale
                .as_deref()
                .cloned()
                .or_else(|| app.get_selected_link().cloned()),
            Some(Line::from(Span::styled(
                format!("Refresh failed: {}", message),
                Style::default().fg(colors::ERROR),
            ))),
        ),
        _ => (
            app.get_selected_link().cloned(),
            Some(Line::from(Span::styled(
                "Loading latest details...",
                Style::default().fg(colors::WARNING),
            ))),
        ),
    };

    let Some(link) = link else {
        let empty = Paragraph::new("No link selected")
            .style(Style::default().fg(colors::MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let indicator = StatusIndicator::new(&link, now);
    let expires_text = match (link.expires_at_parsed(), link.expires_at.as_deref()) {
        (Some(at), _) if at < now => format!(
            "{} ({} ago)",
            TimeParser::format_date(at),
            TimeParser::format_duration_human(at, now)
        ),
        (Some(at), _) => format!(
            "{} (in {})",
            TimeParser::format_date(at),
            TimeParser::format_duration_human(now, at)
        ),
        (None, Some(raw)) => raw.to_string(),
        (None, None) => "Never".to_string(),
    };

    let mut details = vec![
        Line::from(""),
        Line::from(vec![
            label("Code:      "),
            Span::styled(
                format!("/{}", link.short_code),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(label("URL:")),
        Line::from(Span::styled(
            link.original_url.clone(),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(vec![
            label("Short URL: "),
            Span::styled(
                link.short_url_or(&app.base_url),
                Style::default().fg(colors::SUCCESS),
            ),
        ]),
        Line::from(vec![
            label("Clicks:    "),
            Span::styled(
                link.clicks.to_string(),
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Status:    "),
            Span::styled(indicator.text(), indicator.style()),
        ]),
        Line::from(vec![
            label("Created:   "),
            Span::styled(link.created_label(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label("Expires:   "),
            Span::styled(
                expires_text,
                Style::default().fg(if link.expires_at.is_some() {
                    colors::WARNING
                } else {
                    Color::White
                }),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(note) = note {
        details.push(note);
        details.push(Line::from(""));
    }
    details.push(Line::from(vec![
        Span::styled(" y ", Style::default().fg(colors::WARNING).bold()),
        label("copy short URL  "),
        Span::styled(" c ", Style::default().fg(colors::WARNING).bold()),
        label("analytics"),
    ]));

    let paragraph = Paragraph::new(details)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
