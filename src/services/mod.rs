//! Service layer shared by the CLI and the TUI
//!
//! Services own the caches; clients only talk to the backend.

mod analytics_service;
mod link_service;

pub use analytics_service::AnalyticsService;
pub use link_service::{LinkService, SubmitOutcome};

use std::sync::Arc;

use crate::client::{AnalyticsClient, ApiTransport, LinkClient, TelemetryClient, transport_from_config};
use crate::config::AppConfig;

/// 一次 CLI 调用或 TUI 会话使用的服务集合
#[derive(Clone)]
pub struct ServiceContext {
    pub links: LinkService,
    pub analytics: AnalyticsService,
    pub telemetry: TelemetryClient,
}

impl ServiceContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_transport(transport_from_config(&config.api), config.telemetry.enabled)
    }

    pub fn with_transport(transport: Arc<dyn ApiTransport>, telemetry_enabled: bool) -> Self {
        Self {
            links: LinkService::new(LinkClient::new(Arc::clone(&transport))),
            analytics: AnalyticsService::new(AnalyticsClient::new(Arc::clone(&transport))),
            telemetry: TelemetryClient::new(transport, telemetry_enabled),
        }
    }
}
