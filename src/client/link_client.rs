//! Link operations client

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::keys;
use crate::errors::{LinkshortError, Result};
use crate::models::{CreateLinkRequest, CreateLinkResponse, Link};

use super::{ApiTransport, get_json, server_error_message};

const SHORTEN_PATH: &str = "/api/shorten";

/// 短链接读取与创建
#[derive(Clone)]
pub struct LinkClient {
    transport: Arc<dyn ApiTransport>,
}

impl LinkClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// `POST /api/shorten`
    pub async fn create_link(&self, request: &CreateLinkRequest) -> Result<CreateLinkResponse> {
        let body = serde_json::to_string(request)?;
        debug!("Creating short link for {}", request.url);

        let reply = self
            .transport
            .post_json(SHORTEN_PATH, body)
            .await
            .map_err(|e| LinkshortError::creation_failed(format!("Failed to create link: {}", e)))?;

        if !reply.is_success() {
            let message = server_error_message(&reply).unwrap_or_else(|| {
                format!("Failed to create link (HTTP {})", reply.status)
            });
            return Err(LinkshortError::creation_failed(message));
        }

        let created: CreateLinkResponse = serde_json::from_str(&reply.body).map_err(|e| {
            LinkshortError::creation_failed(format!("Invalid response from server: {}", e))
        })?;
        info!("Created short link {} -> {}", created.short_code, request.url);
        Ok(created)
    }

    /// `GET /api/links`
    pub async fn fetch_links(&self) -> Result<Vec<Link>> {
        get_json(self.transport.as_ref(), keys::LINKS).await
    }

    /// `GET /api/links/{code}`，404 同样是获取失败
    pub async fn fetch_link(&self, short_code: &str) -> Result<Link> {
        get_json(self.transport.as_ref(), &keys::link(short_code)).await
    }
}
