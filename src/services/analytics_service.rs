use std::sync::Arc;

use tokio::sync::watch;

use crate::cache::{SwrCache, ViewState, keys};
use crate::client::AnalyticsClient;
use crate::errors::Result;
use crate::models::{AnalyticsData, AnalyticsScope};

/// 统计数据服务，每个 scope 对应一个缓存 key
#[derive(Clone)]
pub struct AnalyticsService {
    client: AnalyticsClient,
    cache: SwrCache<Option<AnalyticsData>>,
}

impl AnalyticsService {
    pub fn new(client: AnalyticsClient) -> Self {
        Self {
            client,
            cache: SwrCache::new(),
        }
    }

    /// 切换 scope 即切换 key，新 key 首次访问时请求
    pub fn observe(&self, scope: &AnalyticsScope) -> ViewState<Option<AnalyticsData>> {
        let client = self.client.clone();
        let owned = scope.clone();
        let snapshot = self.cache.observe(&keys::analytics(scope), move || async move {
            client.fetch_analytics(&owned).await
        });
        ViewState::from_snapshot(&snapshot)
    }

    pub fn revalidate(&self, scope: &AnalyticsScope) {
        let client = self.client.clone();
        let owned = scope.clone();
        self.cache.revalidate(&keys::analytics(scope), move || async move {
            client.fetch_analytics(&owned).await
        });
    }

    pub fn invalidate(&self, scope: &AnalyticsScope) {
        self.cache.invalidate(&keys::analytics(scope));
    }

    pub async fn load(&self, scope: &AnalyticsScope) -> Result<Arc<Option<AnalyticsData>>> {
        self.cache
            .fetch_now(&keys::analytics(scope), self.client.fetch_analytics(scope))
            .await
    }

    pub fn subscribe(&self, scope: &AnalyticsScope) -> watch::Receiver<u64> {
        self.cache.subscribe(&keys::analytics(scope))
    }
}
