//! HTTP 传输层
//!
//! `ureq` 是阻塞客户端，请求放在 `spawn_blocking` 中执行，不阻塞运行时。

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;
use ureq::Agent;

use crate::config::ApiConfig;

/// 原始 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 请求没有拿到任何 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// 连接、DNS、超时等网络错误
    Network(String),
    /// 读取响应体失败
    Body(String),
    /// 后台请求任务异常退出
    Task(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {}", msg),
            TransportError::Body(msg) => write!(f, "failed to read response: {}", msg),
            TransportError::Task(msg) => write!(f, "request task failed: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// API 传输抽象，测试中可替换为内存实现
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError>;

    /// 发送 JSON 请求体
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError>;

    fn name(&self) -> &'static str;
}

/// 基于 ureq 的 HTTP 实现
pub struct HttpTransport {
    base_url: String,
    agent: Agent,
}

impl HttpTransport {
    /// `timeout` 为 `None` 时不限制请求时长
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        // 非 2xx 也作为正常响应返回，由上层映射错误
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, config.timeout_secs.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn read_reply(
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<HttpReply, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(HttpReply { status, body })
    }

    fn get_sync(agent: Agent, url: String) -> Result<HttpReply, TransportError> {
        trace!("GET {}", url);
        let response = agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read_reply(response)
    }

    fn post_sync(agent: Agent, url: String, body: String) -> Result<HttpReply, TransportError> {
        trace!("POST {}", url);
        let response = agent
            .post(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send(body)
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read_reply(response)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        let agent = self.agent.clone();
        let url = self.url(path);
        tokio::task::spawn_blocking(move || Self::get_sync(agent, url))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        let agent = self.agent.clone();
        let url = self.url(path);
        tokio::task::spawn_blocking(move || Self::post_sync(agent, url, body))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
