//! API client layer for CLI/TUI interfaces
//!
//! ```text
//! CLI/TUI → Services (cache) → Clients → ApiTransport ──→ HTTP backend
//! ```
//!
//! # Error mapping
//!
//! - Transport error / non-2xx / undecodable body on a read → `FetchFailed`
//! - Same on `POST /api/shorten` → `CreationFailed`, carrying the server's
//!   `{"error": "..."}` message when present
//! - Telemetry failures are swallowed

mod analytics_client;
mod link_client;
mod telemetry;
mod transport;

pub use analytics_client::AnalyticsClient;
pub use link_client::LinkClient;
pub use telemetry::{TelemetryClient, VitalRating, WebVital};
pub use transport::{ApiTransport, HttpReply, HttpTransport, TransportError};

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::errors::{LinkshortError, Result};

/// 根据配置创建 HTTP 传输
pub fn transport_from_config(config: &ApiConfig) -> Arc<dyn ApiTransport> {
    Arc::new(HttpTransport::from_config(config))
}

/// 从错误响应体中提取服务端消息
///
/// 支持 `{"error": "..."}` 和 `{"message": "..."}`
pub(crate) fn server_error_message(reply: &HttpReply) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(&reply.body).ok()?;
    json.get("error")
        .and_then(|v| v.as_str())
        .or_else(|| json.get("message").and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(String::from)
}

/// GET 并解码 JSON，任何失败都映射为 `FetchFailed`
pub(crate) async fn get_json<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    path: &str,
) -> Result<T> {
    let reply = transport
        .get(path)
        .await
        .map_err(|e| LinkshortError::fetch_failed(format!("Failed to fetch {}: {}", path, e)))?;

    if !reply.is_success() {
        let detail = server_error_message(&reply)
            .map(|msg| format!(": {}", msg))
            .unwrap_or_default();
        return Err(LinkshortError::fetch_failed(format!(
            "Failed to fetch {} (HTTP {}){}",
            path, reply.status, detail
        )));
    }

    serde_json::from_str(&reply.body).map_err(|e| {
        LinkshortError::fetch_failed(format!("Invalid response from {}: {}", path, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        let reply = HttpReply::new(409, r#"{"error":"Short code already exists"}"#);
        assert_eq!(
            server_error_message(&reply).as_deref(),
            Some("Short code already exists")
        );

        let reply = HttpReply::new(400, r#"{"message":"bad url"}"#);
        assert_eq!(server_error_message(&reply).as_deref(), Some("bad url"));
    }

    #[test]
    fn test_server_error_message_missing() {
        assert!(server_error_message(&HttpReply::new(500, "Internal Server Error")).is_none());
        assert!(server_error_message(&HttpReply::new(500, r#"{"error":"  "}"#)).is_none());
        assert!(server_error_message(&HttpReply::new(500, r#"{"error":42}"#)).is_none());
    }
}
