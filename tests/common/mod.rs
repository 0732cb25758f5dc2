//! 集成测试共用的脚本化 transport

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use linkshort::client::{ApiTransport, HttpReply, TransportError};
use linkshort::services::ServiceContext;

#[derive(Clone)]
enum Scripted {
    Reply(u16, String),
    Fail(String),
}

#[derive(Clone)]
struct Step {
    delay: Option<Duration>,
    outcome: Scripted,
}

/// 按 `"METHOD path"` 排队的应答，队列只剩一条时重复使用
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, VecDeque<Step>>>,
    requests: Mutex<Vec<String>>,
    bodies: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, route: String, step: Step) {
        self.routes
            .lock()
            .unwrap()
            .entry(route)
            .or_default()
            .push_back(step);
    }

    pub fn on_get(&self, path: &str, status: u16, body: &str) -> &Self {
        self.push(
            format!("GET {}", path),
            Step {
                delay: None,
                outcome: Scripted::Reply(status, body.to_string()),
            },
        );
        self
    }

    pub fn on_get_delayed(&self, path: &str, delay: Duration, body: &str) -> &Self {
        self.push(
            format!("GET {}", path),
            Step {
                delay: Some(delay),
                outcome: Scripted::Reply(200, body.to_string()),
            },
        );
        self
    }

    pub fn fail_get(&self, path: &str, message: &str) -> &Self {
        self.push(
            format!("GET {}", path),
            Step {
                delay: None,
                outcome: Scripted::Fail(message.to_string()),
            },
        );
        self
    }

    pub fn on_post(&self, path: &str, status: u16, body: &str) -> &Self {
        self.push(
            format!("POST {}", path),
            Step {
                delay: None,
                outcome: Scripted::Reply(status, body.to_string()),
            },
        );
        self
    }

    /// 某个路径被 GET 的次数
    pub fn get_count(&self, path: &str) -> usize {
        let route = format!("GET {}", path);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| **r == route)
            .count()
    }

    pub fn post_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.starts_with("POST "))
            .count()
    }

    pub fn post_bodies(&self) -> Vec<serde_json::Value> {
        self.bodies
            .lock()
            .unwrap()
            .iter()
            .map(|b| serde_json::from_str(b).unwrap())
            .collect()
    }

    async fn answer(&self, route: String) -> Result<HttpReply, TransportError> {
        self.requests.lock().unwrap().push(route.clone());
        let step = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(&route) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };
        let Some(step) = step else {
            return Ok(HttpReply::new(404, r#"{"error":"Not found"}"#));
        };
        if let Some(delay) = step.delay {
            tokio::time::sleep(delay).await;
        }
        match step.outcome {
            Scripted::Reply(status, body) => Ok(HttpReply::new(status, body)),
            Scripted::Fail(message) => Err(TransportError::Network(message)),
        }
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        self.answer(format!("GET {}", path)).await
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        self.bodies.lock().unwrap().push(body);
        self.answer(format!("POST {}", path)).await
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn context(transport: &Arc<ScriptedTransport>) -> ServiceContext {
    ServiceContext::with_transport(Arc::clone(transport) as Arc<dyn ApiTransport>, false)
}

pub fn link_json(code: &str, url: &str, expires_at: Option<&str>) -> String {
    serde_json::json!({
        "id": format!("id-{}", code),
        "shortCode": code,
        "originalUrl": url,
        "shortUrl": format!("http://localhost:8080/{}", code),
        "clicks": 3,
        "createdAt": "2024-01-01T00:00:00Z",
        "expiresAt": expires_at,
    })
    .to_string()
}

pub fn links_json(links: &[String]) -> String {
    format!("[{}]", links.join(","))
}

/// 轮询直到条件满足，后台请求在 tokio 任务中完成
pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
