//! Analytics dashboard

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
};
use strum::IntoEnumIterator;

use crate::analytics::{AnalyticsView, Breakdown, TopLinkRow, render_bar};
use crate::cache::ViewState;
use crate::interfaces::tui::app::{AnalyticsTab, App};
use crate::interfaces::tui::constants::{BAR_CELLS, URL_TRUNCATE_LENGTH, colors};
use crate::models::AnalyticsData;
use crate::utils::{format_count, truncate_chars};

const LABEL_WIDTH: usize = 18;

fn section_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED))
}

pub fn draw_analytics_screen(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("Analytics: {}", app.analytics_scope.label());

    match &app.analytics_view {
        ViewState::Loading => draw_notice(
            frame,
            area,
            title,
            "Loading analytics...",
            colors::WARNING,
        ),
        ViewState::Empty { .. } => draw_notice(
            frame,
            area,
            title,
            "No analytics data available yet",
            Color::Gray,
        ),
        ViewState::Error { message, stale } => match stale.as_deref() {
            Some(Some(data)) if !data.has_no_records() => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(5)])
                    .split(area);
                let banner = Paragraph::new(format!(
                    " Showing cached analytics, refresh failed: {} ",
                    message
                ))
                .style(Style::default().fg(Color::White).bg(colors::ERROR));
                frame.render_widget(banner, chunks[0]);
                draw_dashboard(frame, app, chunks[1], data, format!("{} | stale", title));
            }
            _ => draw_notice(
                frame,
                area,
                title,
                &format!("Failed to load analytics: {}", message),
                colors::ERROR,
            ),
        },
        ViewState::Ready { value, validating } => {
            let Some(data) = &**value else {
                draw_notice(frame, area, title, "No analytics data available yet", Color::Gray);
                return;
            };
            let title = if *validating {
                format!("{} | refreshing", title)
            } else {
                title
            };
            draw_dashboard(frame, app, area, data, title);
        }
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, title: String, message: &str, color: Color) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[r] refresh  [g] all links",
            Style::default().fg(colors::MUTED),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(section_block(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect, data: &AnalyticsData, title: String) {
    let view = AnalyticsView::from_data(data);

    let outer = section_block(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Cards
            Constraint::Length(9), // Daily trend
            Constraint::Length(3), // Section tabs
            Constraint::Min(3),    // Section content
        ])
        .split(inner);

    draw_cards(frame, &view, chunks[0]);
    draw_breakdown(
        frame,
        chunks[1],
        "Daily Clicks (last 7 days)".to_string(),
        &view.trend,
        "No daily data available",
    );
    draw_section_tabs(frame, app.analytics_tab, chunks[2]);

    match app.analytics_tab {
        AnalyticsTab::Geography => draw_breakdown(
            frame,
            chunks[3],
            "Clicks by Country".to_string(),
            &view.countries,
            "No geography data available",
        ),
        AnalyticsTab::Referrers => draw_breakdown(
            frame,
            chunks[3],
            "Traffic Sources".to_string(),
            &view.referrers,
            "No referrer data available",
        ),
        AnalyticsTab::TopLinks => draw_top_links(frame, chunks[3], &view.top_links),
    }
}

fn draw_cards(frame: &mut Frame, view: &AnalyticsView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        ("Total Clicks", &view.total_clicks, colors::PRIMARY),
        ("Unique Clicks", &view.unique_clicks, colors::SUCCESS),
        ("Click Rate", &view.click_rate, colors::WARNING),
    ];
    for ((title, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(section_block(title.to_string()));
        frame.render_widget(card, *chunk);
    }
}

fn draw_section_tabs(frame: &mut Frame, current: AnalyticsTab, area: Rect) {
    let titles: Vec<Line> = AnalyticsTab::iter()
        .map(|tab| Line::from(format!(" {} ", tab.as_ref())))
        .collect();
    let selected = AnalyticsTab::iter()
        .position(|tab| tab == current)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold(),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        );
    frame.render_widget(tabs, area);
}

fn draw_breakdown(
    frame: &mut Frame,
    area: Rect,
    title: String,
    breakdown: &Breakdown,
    empty_message: &'static str,
) {
    let lines: Vec<Line> = match breakdown {
        Breakdown::NoData => vec![Line::from(Span::styled(
            empty_message,
            Style::default().fg(colors::MUTED),
        ))],
        Breakdown::Rows(rows) => rows
            .iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(
                        format!(
                            "{:<width$} ",
                            truncate_chars(&row.label, LABEL_WIDTH - 3),
                            width = LABEL_WIDTH
                        ),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        render_bar(row.width_percent, BAR_CELLS),
                        Style::default().fg(colors::PRIMARY),
                    ),
                    Span::styled(
                        format!(" {}", format_count(row.clicks)),
                        Style::default().fg(colors::SUCCESS).bold(),
                    ),
                ])
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines).block(section_block(title)), area);
}

fn draw_top_links(frame: &mut Frame, area: Rect, rows: &[TopLinkRow]) {
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "No links data available",
            Style::default().fg(colors::MUTED),
        ))]
    } else {
        rows.iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("#{} ", row.rank), Style::default().fg(colors::MUTED)),
                    Span::styled(
                        format!("/{:<12} ", row.short_code),
                        Style::default().fg(colors::PRIMARY).bold(),
                    ),
                    Span::styled(
                        format!("{:>8} clicks  ", format_count(row.clicks)),
                        Style::default().fg(colors::SUCCESS),
                    ),
                    Span::styled(
                        truncate_chars(&row.original_url, URL_TRUNCATE_LENGTH),
                        Style::default().fg(Color::Blue),
                    ),
                ])
            })
            .collect()
    };
    frame.render_widget(
        Paragraph::new(lines).block(section_block("Most Clicked Links".to_string())),
        area,
    );
}
