//! Link management service
//!
//! Wraps `LinkClient` with the stale-while-revalidate cache. Views observe
//! keys; a successful creation invalidates and revalidates the link list.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::cache::{SwrCache, ViewState, keys};
use crate::client::LinkClient;
use crate::errors::{LinkshortError, Result};
use crate::form::{FieldErrors, build_request};
use crate::models::{CreateLinkRequest, CreateLinkResponse, Link};

/// 一次提交的结果
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 校验失败，没有发出请求
    Invalid(FieldErrors),
    Created(CreateLinkResponse),
    Failed(LinkshortError),
}

#[derive(Clone)]
pub struct LinkService {
    client: LinkClient,
    lists: SwrCache<Vec<Link>>,
    links: SwrCache<Link>,
}

impl LinkService {
    pub fn new(client: LinkClient) -> Self {
        Self {
            client,
            lists: SwrCache::new(),
            links: SwrCache::new(),
        }
    }

    // ============ Link list ============

    /// 读取链接列表的视图状态，首次访问或失效时后台请求
    pub fn observe_links(&self) -> ViewState<Vec<Link>> {
        let client = self.client.clone();
        let snapshot = self
            .lists
            .observe(keys::LINKS, move || async move { client.fetch_links().await });
        ViewState::from_snapshot(&snapshot)
    }

    /// 后台重新请求，期间旧列表保持可见
    pub fn revalidate_links(&self) {
        let client = self.client.clone();
        self.lists
            .revalidate(keys::LINKS, move || async move { client.fetch_links().await });
    }

    /// 标记列表失效，下次 observe 时重新请求
    pub fn invalidate_links(&self) {
        self.lists.invalidate(keys::LINKS);
    }

    /// 请求并等待最新列表
    pub async fn load_links(&self) -> Result<Arc<Vec<Link>>> {
        self.lists
            .fetch_now(keys::LINKS, self.client.fetch_links())
            .await
    }

    pub fn subscribe_links(&self) -> watch::Receiver<u64> {
        self.lists.subscribe(keys::LINKS)
    }

    // ============ Single link ============

    pub fn observe_link(&self, short_code: &str) -> ViewState<Link> {
        let client = self.client.clone();
        let code = short_code.to_string();
        let snapshot = self.links.observe(&keys::link(short_code), move || async move {
            client.fetch_link(&code).await
        });
        ViewState::from_snapshot(&snapshot)
    }

    pub fn revalidate_link(&self, short_code: &str) {
        let client = self.client.clone();
        let code = short_code.to_string();
        self.links.revalidate(&keys::link(short_code), move || async move {
            client.fetch_link(&code).await
        });
    }

    pub async fn load_link(&self, short_code: &str) -> Result<Arc<Link>> {
        self.links
            .fetch_now(&keys::link(short_code), self.client.fetch_link(short_code))
            .await
    }

    pub fn subscribe_link(&self, short_code: &str) -> watch::Receiver<u64> {
        self.links.subscribe(&keys::link(short_code))
    }

    // ============ Creation ============

    /// 创建短链接，成功后刷新链接列表
    pub async fn create_link(&self, request: &CreateLinkRequest) -> Result<CreateLinkResponse> {
        let created = self.client.create_link(request).await?;
        self.invalidate_links();
        self.revalidate_links();
        Ok(created)
    }

    /// 校验原始输入后提交，非法输入不会发出请求
    pub async fn submit(&self, url: &str, custom_code: &str, expires_in: &str) -> SubmitOutcome {
        let request = match build_request(url, custom_code, expires_in) {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };
        match self.create_link(&request).await {
            Ok(created) => {
                info!("Short link ready: {}", created.short_url);
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                warn!("Link creation failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
