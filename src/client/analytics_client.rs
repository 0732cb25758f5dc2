use std::sync::Arc;

use crate::cache::keys;
use crate::errors::Result;
use crate::models::{AnalyticsData, AnalyticsScope};

use super::{ApiTransport, get_json};

#[derive(Clone)]
pub struct AnalyticsClient {
    transport: Arc<dyn ApiTransport>,
}

impl AnalyticsClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/analytics` 或 `GET /api/analytics/{code}`
    ///
    /// 响应体为 `null` 时返回 `None`。
    pub async fn fetch_analytics(&self, scope: &AnalyticsScope) -> Result<Option<AnalyticsData>> {
        let path = keys::analytics(scope);
        let data: Option<AnalyticsData> = get_json(self.transport.as_ref(), &path).await?;
        if let Some(data) = &data {
            data.warn_on_anomalies(&path);
        }
        Ok(data)
    }
}
