use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::form::FormField;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

const FIELDS: [FormField; 3] = [FormField::Url, FormField::CustomCode, FormField::ExpiresIn];

pub fn draw_add_link_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Create Short Link", popup::ADD_LINK)
        .theme_color(colors::SUCCESS)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // URL + error
            Constraint::Length(4), // Custom code + error
            Constraint::Length(4), // Expires in + error
            Constraint::Length(1),
            Constraint::Min(2), // Hints
        ])
        .split(inner_area);

    let form = &app.form;
    for (field, chunk) in FIELDS.iter().zip(chunks.iter()) {
        let mut input = InputField::new(field.display_title(), form.input(*field))
            .active(form.editing == *field)
            .error(form.errors.get(*field).map(|e| e.message()))
            .placeholder(field.placeholder())
            .disabled(form.submitting);
        if *field == FormField::Url {
            input = input.required();
        }
        input.render(frame, *chunk);
    }

    let hint = if form.submitting {
        Line::from(Span::styled(
            "Creating short link...",
            Style::default().fg(colors::WARNING).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" create  ", Style::default().fg(Color::White)),
            Span::styled("[Tab]", Style::default().fg(colors::PRIMARY).bold()),
            Span::styled(" next field  ", Style::default().fg(Color::White)),
            Span::styled("[Esc]", Style::default().fg(colors::ERROR).bold()),
            Span::styled(" cancel", Style::default().fg(Color::White)),
        ])
    };
    let note = Line::from(Span::styled(
        "Leave the code empty for a generated one; expiry accepts hours or 2d, 1w",
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(Paragraph::new(vec![hint, note]), chunks[4]);
}
