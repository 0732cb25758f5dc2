//! Link operations and data synchronisation
//!
//! 网络请求都在后台任务中执行，事件循环每个 tick 调用 `on_tick` 收取结果。

use std::time::Instant;

use tracing::{debug, info};

use super::state::{App, CurrentScreen, Tab};
use crate::cache::{ViewState, keys};
use crate::client::WebVital;
use crate::errors::Result;
use crate::models::{CreateLinkResponse, Link};
use crate::utils::clipboard::Clipboard;

impl App {
    /// 每个 tick 调用一次
    pub fn on_tick(&mut self, now: Instant) {
        while let Ok(result) = self.creation_rx.try_recv() {
            self.handle_creation_result(result);
        }

        if let Some(interval) = self.refresh_interval
            && now.duration_since(self.last_refresh) >= interval
        {
            debug!("Auto refresh ({:?})", self.current_tab);
            self.refresh();
        }

        self.sync_views();

        if self.toasts.prune(now) {
            self.mark_dirty();
        }
    }

    /// 从缓存读取当前标签页的视图，首次访问时会触发请求
    pub fn sync_views(&mut self) {
        if matches!(self.links_rx.has_changed(), Ok(true)) {
            let _ = self.links_rx.borrow_and_update();
            self.mark_dirty();
        }
        if matches!(self.analytics_rx.has_changed(), Ok(true)) {
            let _ = self.analytics_rx.borrow_and_update();
            self.mark_dirty();
        }

        match self.current_tab {
            Tab::Links => {
                let view = self.ctx.links.observe_links();
                self.apply_links_view(view);
                self.sync_detail_view();
            }
            Tab::Analytics => {
                let view = self.ctx.analytics.observe(&self.analytics_scope);
                if let ViewState::Error { message, .. } = &view
                    && !self.analytics_view.is_error()
                {
                    self.set_error(format!("Failed to load analytics: {}", message));
                }
                self.analytics_view = view;
            }
        }
    }

    fn apply_links_view(&mut self, view: ViewState<Vec<Link>>) {
        if let ViewState::Error { message, .. } = &view
            && !self.links_view.is_error()
        {
            self.set_error(format!("Failed to load links: {}", message));
        }
        if !self.ttfd_reported
            && matches!(view, ViewState::Ready { .. } | ViewState::Empty { .. })
        {
            self.report_first_data();
        }
        self.links_view = view;
        self.clamp_selection();
    }

    fn sync_detail_view(&mut self) {
        if !self.show_detail {
            self.detail_view = None;
            return;
        }
        let Some(code) = self.get_selected_link().map(|link| link.short_code.clone()) else {
            self.detail_view = None;
            return;
        };
        self.detail_view = Some(self.ctx.links.observe_link(&code));
    }

    fn report_first_data(&mut self) {
        self.ttfd_reported = true;
        let elapsed = self.started_at.elapsed();
        info!("First link data after {:?}", elapsed);
        if self.ctx.telemetry.is_enabled() {
            self.ctx
                .telemetry
                .report_in_background(WebVital::time_to_first_data(elapsed, keys::LINKS));
        }
    }

    /// 后台重新验证当前标签页，旧数据保持可见
    pub fn refresh(&mut self) {
        self.last_refresh = Instant::now();
        match self.current_tab {
            Tab::Links => {
                self.ctx.links.revalidate_links();
                if self.show_detail
                    && let Some(code) = self.get_selected_link().map(|l| l.short_code.clone())
                {
                    self.ctx.links.revalidate_link(&code);
                }
            }
            Tab::Analytics => self.ctx.analytics.revalidate(&self.analytics_scope),
        }
        self.mark_dirty();
    }

    // ============ Creation ============

    pub fn open_add_link(&mut self) {
        self.form.clear();
        self.current_screen = CurrentScreen::AddLink;
        self.mark_dirty();
    }

    /// 校验表单并在后台提交；校验失败时错误显示在对应字段下方
    pub fn submit_form(&mut self) {
        let Some(request) = self.form.prepare_submission() else {
            self.mark_dirty();
            return;
        };

        let links = self.ctx.links.clone();
        let tx = self.creation_tx.clone();
        tokio::spawn(async move {
            let result = links.create_link(&request).await;
            // 接收端随 App 一起释放，退出后结果直接丢弃
            let _ = tx.send(result);
        });
        self.set_info("Creating short link...");
    }

    pub fn handle_creation_result(&mut self, result: Result<CreateLinkResponse>) {
        self.form.complete(&result);
        match result {
            Ok(created) => {
                self.show_last_created = true;
                if self.current_screen == CurrentScreen::AddLink {
                    self.current_screen = CurrentScreen::Main;
                }
                self.set_status(format!("Short link created: {}", created.short_url));
            }
            Err(e) => {
                self.set_error(format!("Failed to create link: {}", e.message()));
            }
        }
    }

    pub fn dismiss_last_created(&mut self) {
        self.show_last_created = false;
        self.mark_dirty();
    }

    pub fn toggle_detail(&mut self) {
        if self.get_selected_link().is_some() {
            self.show_detail = !self.show_detail;
            self.sync_detail_view();
            self.mark_dirty();
        }
    }

    // ============ Clipboard ============

    pub fn copy_selected_short_url(&mut self) {
        let Some(url) = self
            .get_selected_link()
            .map(|link| link.short_url_or(&self.base_url))
        else {
            return;
        };
        self.copy_with_toast(&url);
    }

    pub fn copy_selected_original_url(&mut self) {
        let Some(url) = self.get_selected_link().map(|link| link.original_url.clone()) else {
            return;
        };
        self.copy_with_toast(&url);
    }

    pub fn copy_last_created(&mut self) {
        let Some(url) = self.form.last_created().map(|c| c.short_url.clone()) else {
            self.set_error("No link has been created yet");
            return;
        };
        self.copy_with_toast(&url);
    }

    fn copy_with_toast(&mut self, text: &str) {
        let result = self.clipboard.copy_text(text);
        self.report_copy(result, text);
    }

    /// 复制的成功与失败都要给出提示
    pub(crate) fn report_copy(&mut self, result: Result<()>, text: &str) {
        match result {
            Ok(()) => self.set_status(format!("Copied: {}", text)),
            Err(e) => self.set_error(e.message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::client::{ApiTransport, HttpReply, TransportError};
    use crate::config::AppConfig;
    use crate::errors::LinkshortError;
    use crate::form::FormField;
    use crate::interfaces::tui::app::ToastKind;
    use crate::services::ServiceContext;

    #[derive(Default)]
    struct FakeTransport {
        posts: Mutex<Vec<String>>,
        links_body: Option<&'static str>,
    }

    #[async_trait]
    impl ApiTransport for FakeTransport {
        async fn get(&self, _path: &str) -> std::result::Result<HttpReply, TransportError> {
            match self.links_body {
                Some(body) => Ok(HttpReply::new(200, body)),
                None => Err(TransportError::Network("connection refused".into())),
            }
        }

        async fn post_json(
            &self,
            path: &str,
            body: String,
        ) -> std::result::Result<HttpReply, TransportError> {
            self.posts.lock().unwrap().push(format!("{} {}", path, body));
            Ok(HttpReply::new(
                200,
                r#"{"shortUrl":"http://localhost:8080/abc","shortCode":"abc"}"#,
            ))
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn app_with(transport: Arc<FakeTransport>) -> App {
        let ctx = ServiceContext::with_transport(transport, false);
        App::new(ctx, &AppConfig::default())
    }

    fn created() -> CreateLinkResponse {
        CreateLinkResponse {
            short_url: "http://localhost:8080/abc".to_string(),
            short_code: "abc".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_submitted() {
        let transport = Arc::new(FakeTransport::default());
        let mut app = app_with(Arc::clone(&transport));
        app.open_add_link();
        app.form.url = "not-a-url".to_string();

        app.submit_form();

        assert!(app.form.errors.get(FormField::Url).is_some());
        assert!(!app.form.submitting);
        assert_eq!(app.current_screen, CurrentScreen::AddLink);
        assert!(transport.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_creation_shows_panel() {
        let mut app = app_with(Arc::new(FakeTransport::default()));
        app.open_add_link();
        app.form.url = "https://example.com".to_string();
        assert!(app.form.prepare_submission().is_some());

        app.handle_creation_result(Ok(created()));

        assert!(app.show_last_created);
        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert!(app.form.url.is_empty());
        assert_eq!(
            app.form.last_created().map(|c| c.short_code.as_str()),
            Some("abc")
        );
        assert_eq!(app.toasts.current().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[tokio::test]
    async fn test_failed_creation_keeps_input() {
        let mut app = app_with(Arc::new(FakeTransport::default()));
        app.open_add_link();
        app.form.url = "https://example.com".to_string();
        assert!(app.form.prepare_submission().is_some());

        app.handle_creation_result(Err(LinkshortError::creation_failed("code taken")));

        assert_eq!(app.form.url, "https://example.com");
        assert!(!app.form.submitting);
        assert!(!app.show_last_created);
        assert_eq!(app.current_screen, CurrentScreen::AddLink);
        let toast = app.toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("code taken"));
    }

    #[tokio::test]
    async fn test_fetch_error_raises_toast_once() {
        let mut app = app_with(Arc::new(FakeTransport::default()));
        assert!(app.ctx.links.load_links().await.is_err());

        app.sync_views();
        app.sync_views();

        assert!(app.links_view.is_error());
        assert_eq!(app.toasts.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_is_empty_state() {
        let transport = Arc::new(FakeTransport {
            links_body: Some("[]"),
            ..Default::default()
        });
        let mut app = app_with(transport);
        app.ctx.links.load_links().await.unwrap();

        app.sync_views();

        assert!(app.links_view.is_empty());
        assert_eq!(app.display_count(), 0);
        assert!(app.ttfd_reported);
    }

    #[tokio::test]
    async fn test_copy_failure_is_reported() {
        let mut app = app_with(Arc::new(FakeTransport::default()));
        app.report_copy(Err(LinkshortError::clipboard_failed("no display")), "x");
        assert_eq!(app.toasts.current().map(|t| t.kind), Some(ToastKind::Error));

        app.report_copy(Ok(()), "http://localhost:8080/abc");
        assert_eq!(app.toasts.current().map(|t| t.kind), Some(ToastKind::Success));
    }
}
