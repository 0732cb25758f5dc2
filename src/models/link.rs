//! Link 数据模型与生命周期状态

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::TimeParser;

/// 一条短链接（服务端状态的只读镜像）
///
/// 时间字段保持服务端返回的 ISO-8601 字符串，只在计算状态时解析。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub short_url: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// 链接生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    Expired,
}

impl LinkStatus {
    /// 以给定时刻计算状态
    pub fn of(link: &Link, now: DateTime<Utc>) -> Self {
        if is_expired(link, now) {
            Self::Expired
        } else {
            Self::Active
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `expiresAt` 存在且早于 `now` 时视为过期
///
/// 每次渲染都要用当前时间重新计算，不能缓存结果。无法解析的时间戳
/// 不会早于任何时刻，因此按未过期处理。
pub fn is_expired(link: &Link, now: DateTime<Utc>) -> bool {
    let Some(raw) = link.expires_at.as_deref() else {
        return false;
    };
    match TimeParser::parse_timestamp(raw) {
        Some(expires_at) => expires_at < now,
        None => {
            warn!(
                "Link '{}' has unparseable expiresAt '{}', treating as active",
                link.short_code, raw
            );
            false
        }
    }
}

impl Link {
    pub fn status_at(&self, now: DateTime<Utc>) -> LinkStatus {
        LinkStatus::of(self, now)
    }

    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        TimeParser::parse_timestamp(&self.created_at)
    }

    pub fn expires_at_parsed(&self) -> Option<DateTime<Utc>> {
        self.expires_at.as_deref().and_then(TimeParser::parse_timestamp)
    }

    /// 服务端未返回 `shortUrl` 时用 base URL 拼接
    pub fn short_url_or(&self, base_url: &str) -> String {
        if self.short_url.is_empty() {
            format!("{}/{}", base_url.trim_end_matches('/'), self.short_code)
        } else {
            self.short_url.clone()
        }
    }

    /// 创建时间的展示文本，解析失败时原样返回
    pub fn created_label(&self) -> String {
        self.created_at_parsed()
            .map(TimeParser::format_date)
            .unwrap_or_else(|| self.created_at.clone())
    }
}

/// `POST /api/shorten` 请求体
///
/// 空的自定义短码不会出现在 JSON 中，由服务端生成短码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_hours: Option<u32>,
}

/// `POST /api/shorten` 响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    #[serde(alias = "short_url")]
    pub short_url: String,
    #[serde(alias = "short_code")]
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn link_expiring(expires_at: Option<&str>) -> Link {
        Link {
            id: "1".to_string(),
            short_code: "abc".to_string(),
            original_url: "https://example.com".to_string(),
            short_url: "http://localhost:8080/abc".to_string(),
            clicks: 0,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            expires_at: expires_at.map(str::to_string),
        }
    }

    #[test]
    fn test_no_expiry_is_active() {
        let link = link_expiring(None);
        assert_eq!(link.status_at(Utc::now()), LinkStatus::Active);
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let link = link_expiring(Some("2024-05-31T23:59:59Z"));
        assert!(is_expired(&link, now));
        assert_eq!(LinkStatus::of(&link, now), LinkStatus::Expired);
    }

    #[test]
    fn test_status_follows_the_clock() {
        let expires = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let link = link_expiring(Some("2024-06-01T12:00:00Z"));
        assert_eq!(
            link.status_at(expires - Duration::seconds(1)),
            LinkStatus::Active
        );
        // 恰好等于过期时刻时仍未"早于"now
        assert_eq!(link.status_at(expires), LinkStatus::Active);
        assert_eq!(
            link.status_at(expires + Duration::seconds(1)),
            LinkStatus::Expired
        );
    }

    #[test]
    fn test_unparseable_expiry_is_active() {
        let link = link_expiring(Some("someday"));
        assert_eq!(link.status_at(Utc::now()), LinkStatus::Active);
    }

    #[test]
    fn test_decode_link_from_wire() {
        let json = r#"{
            "id": "7f1c",
            "shortCode": "docs",
            "originalUrl": "https://example.com/docs",
            "shortUrl": "https://s.example.com/docs",
            "clicks": 42,
            "createdAt": "2024-01-05T08:00:00Z",
            "expiresAt": null
        }"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.short_code, "docs");
        assert_eq!(link.clicks, 42);
        assert_eq!(link.expires_at, None);
        assert_eq!(link.created_label(), "Jan 5, 2024");
    }

    #[test]
    fn test_request_omits_empty_optionals() {
        let request = CreateLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: None,
            expires_in_hours: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "url": "https://example.com" }));
    }

    #[test]
    fn test_request_uses_camel_case() {
        let request = CreateLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: Some("promo".to_string()),
            expires_in_hours: Some(48),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["customCode"], "promo");
        assert_eq!(value["expiresInHours"], 48);
    }

    #[test]
    fn test_response_accepts_snake_case() {
        let camel: CreateLinkResponse =
            serde_json::from_str(r#"{"shortUrl":"https://s.io/a","shortCode":"a"}"#).unwrap();
        let snake: CreateLinkResponse =
            serde_json::from_str(r#"{"short_url":"https://s.io/a","short_code":"a"}"#).unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_short_url_falls_back_to_base() {
        let mut link = link_expiring(None);
        assert_eq!(link.short_url_or("http://other"), "http://localhost:8080/abc");
        link.short_url.clear();
        assert_eq!(link.short_url_or("https://s.io/"), "https://s.io/abc");
    }
}
