//! 链接状态指示器
//!
//! 状态在每次渲染时用当前时间重新计算

use chrono::{DateTime, Utc};
use ratatui::style::{Color, Style};

use crate::interfaces::tui::constants::{colors, status_text};
use crate::models::{Link, LinkStatus};

pub struct StatusIndicator {
    pub status: LinkStatus,
}

impl StatusIndicator {
    pub fn new(link: &Link, now: DateTime<Utc>) -> Self {
        Self {
            status: link.status_at(now),
        }
    }

    pub fn text(&self) -> &'static str {
        match self.status {
            LinkStatus::Active => status_text::ACTIVE,
            LinkStatus::Expired => status_text::EXPIRED,
        }
    }

    pub fn color(&self) -> Color {
        match self.status {
            LinkStatus::Active => colors::SUCCESS,
            LinkStatus::Expired => colors::ERROR,
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.color()).bold()
    }
}
