//! 性能指标上报（fire-and-forget）

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use super::ApiTransport;

const WEB_VITALS_PATH: &str = "/api/analytics/web-vitals";

/// TTFD 阈值（毫秒）
const TTFD_GOOD_MS: f64 = 1000.0;
const TTFD_POOR_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl VitalRating {
    pub fn for_ttfd(elapsed: Duration) -> Self {
        let ms = elapsed.as_secs_f64() * 1000.0;
        if ms <= TTFD_GOOD_MS {
            Self::Good
        } else if ms <= TTFD_POOR_MS {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebVital {
    pub name: String,
    pub value: f64,
    pub id: String,
    pub delta: f64,
    pub rating: VitalRating,
    pub url: String,
    pub timestamp: i64,
}

impl WebVital {
    /// 首次数据到达耗时
    pub fn time_to_first_data(elapsed: Duration, url: &str) -> Self {
        let now = chrono::Utc::now();
        let value = elapsed.as_secs_f64() * 1000.0;
        Self {
            name: "TTFD".to_string(),
            value,
            id: format!("v1-{}", now.timestamp_millis()),
            delta: value,
            rating: VitalRating::for_ttfd(elapsed),
            url: url.to_string(),
            timestamp: now.timestamp_millis(),
        }
    }
}

#[derive(Clone)]
pub struct TelemetryClient {
    transport: Arc<dyn ApiTransport>,
    enabled: bool,
}

impl TelemetryClient {
    pub fn new(transport: Arc<dyn ApiTransport>, enabled: bool) -> Self {
        Self { transport, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 上报指标，失败只记录 debug 日志
    pub async fn report(&self, vital: &WebVital) {
        if !self.enabled {
            trace!("Telemetry disabled, dropping {}", vital.name);
            return;
        }
        let body = match serde_json::to_string(vital) {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to encode web vital {}: {}", vital.name, e);
                return;
            }
        };
        match self.transport.post_json(WEB_VITALS_PATH, body).await {
            Ok(reply) if reply.is_success() => trace!("Reported {} = {:.0}", vital.name, vital.value),
            Ok(reply) => debug!("Web vital beacon rejected (HTTP {})", reply.status),
            Err(e) => debug!("Web vital beacon failed: {}", e),
        }
    }

    /// 在后台上报，不等待结果
    pub fn report_in_background(&self, vital: WebVital) {
        if !self.enabled {
            return;
        }
        let client = self.clone();
        tokio::spawn(async move {
            client.report(&vital).await;
        });
    }
}
