//! App state definition and basic state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use strum::{AsRefStr, EnumIter};
use tokio::sync::{mpsc, watch};

use super::toast::{ToastKind, ToastQueue};
use crate::cache::ViewState;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::form::LinkForm;
use crate::models::{AnalyticsData, AnalyticsScope, CreateLinkResponse, Link};
use crate::services::ServiceContext;
use crate::utils::clipboard::SystemClipboard;

/// 顶部标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum Tab {
    Links,
    Analytics,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Self::Links => Self::Analytics,
            Self::Analytics => Self::Links,
        }
    }
}

/// 统计页的子标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum AnalyticsTab {
    Geography,
    Referrers,
    #[strum(serialize = "Top Links")]
    TopLinks,
}

impl AnalyticsTab {
    pub fn next(self) -> Self {
        match self {
            Self::Geography => Self::Referrers,
            Self::Referrers => Self::TopLinks,
            Self::TopLinks => Self::Geography,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Geography => Self::TopLinks,
            Self::Referrers => Self::Geography,
            Self::TopLinks => Self::Referrers,
        }
    }
}

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    AddLink,
    Help,
    Exiting,
}

pub struct App {
    pub ctx: ServiceContext,
    pub base_url: String,
    pub current_screen: CurrentScreen,
    pub current_tab: Tab,
    pub analytics_tab: AnalyticsTab,

    // Add link form
    pub form: LinkForm,
    /// "Your Short Link" 面板是否显示
    pub show_last_created: bool,

    // Links table
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub show_detail: bool,

    // Views derived from the caches
    pub links_view: ViewState<Vec<Link>>,
    pub detail_view: Option<ViewState<Link>>,
    pub analytics_scope: AnalyticsScope,
    pub analytics_view: ViewState<Option<AnalyticsData>>,
    pub(super) links_rx: watch::Receiver<u64>,
    pub(super) analytics_rx: watch::Receiver<u64>,

    // Creation results come back from spawned tasks
    pub(super) creation_tx: mpsc::UnboundedSender<Result<CreateLinkResponse>>,
    pub(super) creation_rx: mpsc::UnboundedReceiver<Result<CreateLinkResponse>>,

    pub toasts: ToastQueue,
    /// 应用存活期间一直持有，Linux 上内容才不会丢失
    pub(super) clipboard: SystemClipboard,
    pub(super) started_at: Instant,
    pub(super) ttfd_reported: bool,
    pub(super) refresh_interval: Option<Duration>,
    pub(super) last_refresh: Instant,
    pub(super) dirty: bool,
}

impl App {
    pub fn new(ctx: ServiceContext, config: &AppConfig) -> App {
        let analytics_scope = AnalyticsScope::Global;
        let links_rx = ctx.links.subscribe_links();
        let analytics_rx = ctx.analytics.subscribe(&analytics_scope);
        let (creation_tx, creation_rx) = mpsc::unbounded_channel();
        let refresh_interval = match config.ui.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let now = Instant::now();

        App {
            ctx,
            base_url: config.api.base_url.clone(),
            current_screen: CurrentScreen::Main,
            current_tab: Tab::Links,
            analytics_tab: AnalyticsTab::Geography,
            form: LinkForm::new(),
            show_last_created: false,
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 10,
            show_detail: false,
            links_view: ViewState::Loading,
            detail_view: None,
            analytics_scope,
            analytics_view: ViewState::Loading,
            links_rx,
            analytics_rx,
            creation_tx,
            creation_rx,
            toasts: ToastQueue::new(Duration::from_secs(config.ui.toast_duration_secs.max(1))),
            clipboard: SystemClipboard::new(),
            started_at: now,
            ttfd_reported: false,
            refresh_interval,
            last_refresh: now,
            dirty: true,
        }
    }

    /// 当前可展示的链接：最新值，或者出错前的旧值
    pub fn visible_links(&self) -> Option<&Arc<Vec<Link>>> {
        match &self.links_view {
            ViewState::Ready { value, .. } => Some(value),
            ViewState::Error { stale, .. } => stale.as_ref(),
            _ => None,
        }
    }

    pub fn display_count(&self) -> usize {
        self.visible_links().map_or(0, |links| links.len())
    }

    pub fn get_selected_link(&self) -> Option<&Link> {
        self.visible_links()
            .and_then(|links| links.get(self.selected_index))
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.toasts.push(ToastKind::Success, message, Instant::now());
        self.dirty = true;
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.toasts.push(ToastKind::Info, message, Instant::now());
        self.dirty = true;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.toasts.push(ToastKind::Error, message, Instant::now());
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// 读取并清除重绘标记
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
