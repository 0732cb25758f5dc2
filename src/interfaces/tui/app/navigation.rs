//! Navigation and selection logic

use super::state::{App, Tab};
use crate::cache::ViewState;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;
use crate::models::AnalyticsScope;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.on_selection_changed();
    }

    pub fn move_selection_down(&mut self) {
        let display_len = self.display_count();
        if self.selected_index < display_len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.on_selection_changed();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.on_selection_changed();
    }

    pub fn jump_to_bottom(&mut self) {
        let display_len = self.display_count();
        if display_len > 0 {
            self.selected_index = display_len - 1;
        }
        self.on_selection_changed();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.on_selection_changed();
    }

    pub fn page_down(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.on_selection_changed();
    }

    /// 列表变短后把光标拉回范围内
    pub fn clamp_selection(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
            self.adjust_scroll_offset();
        }
    }

    /// 调整 scroll_offset 确保 selected_index 在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let vh = self.last_visible_height.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + vh {
            self.scroll_offset = self.selected_index - vh + 1;
        }
    }

    fn on_selection_changed(&mut self) {
        self.adjust_scroll_offset();
        // 详情面板跟随光标，换一个 key 观察
        self.detail_view = None;
        self.mark_dirty();
    }

    // ============ Tabs ============

    /// 标签页重新显示时重新验证，旧数据在请求期间保持可见
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.current_tab != tab {
            self.current_tab = tab;
            match tab {
                Tab::Links => self.ctx.links.invalidate_links(),
                Tab::Analytics => self.ctx.analytics.invalidate(&self.analytics_scope),
            }
            self.mark_dirty();
        }
    }

    pub fn toggle_tab(&mut self) {
        self.switch_tab(self.current_tab.toggle());
    }

    pub fn next_analytics_tab(&mut self) {
        self.analytics_tab = self.analytics_tab.next();
        self.mark_dirty();
    }

    pub fn prev_analytics_tab(&mut self) {
        self.analytics_tab = self.analytics_tab.prev();
        self.mark_dirty();
    }

    /// 切换统计范围即切换缓存 key
    pub fn set_analytics_scope(&mut self, scope: AnalyticsScope) {
        if self.analytics_scope == scope {
            return;
        }
        self.analytics_rx = self.ctx.analytics.subscribe(&scope);
        // 之前看过的 scope 也要重新请求
        self.ctx.analytics.invalidate(&scope);
        self.analytics_scope = scope;
        self.analytics_view = ViewState::Loading;
        self.mark_dirty();
    }

    /// 查看选中链接的统计
    pub fn show_selected_analytics(&mut self) {
        let Some(code) = self.get_selected_link().map(|link| link.short_code.clone()) else {
            return;
        };
        self.set_analytics_scope(AnalyticsScope::Link(code));
        self.switch_tab(Tab::Analytics);
    }
}
