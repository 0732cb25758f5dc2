//! 通用输入框组件
//!
//! 激活状态高亮，字段错误显示在输入框下方

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Destination URL", &app.form.url)
///     .active(true)
///     .error(Some("Please enter a valid URL"))
///     .placeholder("https://example.com")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    required: bool,
    disabled: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            required: false,
            disabled: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 提交进行中时禁止编辑
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 输入框 3 行，有错误时再加 1 行
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();
        if self.required {
            title.push_str(" *");
        }
        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} (e.g. {})", title, placeholder);
        }
        title
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}
