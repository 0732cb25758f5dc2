//! 点击统计数据模型

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateClicks {
    pub date: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryClicks {
    pub country: String,
    pub clicks: u64,
}

/// 空字符串 referrer 表示直接访问，`null` 同样按空字符串解码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerClicks {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub referrer: String,
    pub clicks: u64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLink {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
}

/// `GET /api/analytics[/{code}]` 响应体
///
/// 缺失的序列按空处理；各 breakdown 由服务端按 clicks 降序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub unique_clicks: u64,
    #[serde(default)]
    pub clicks_by_date: Vec<DateClicks>,
    #[serde(default)]
    pub clicks_by_country: Vec<CountryClicks>,
    #[serde(default)]
    pub clicks_by_referrer: Vec<ReferrerClicks>,
    #[serde(default)]
    pub top_links: Vec<TopLink>,
}

/// 统计范围：全局或单个短链接
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AnalyticsScope {
    #[default]
    Global,
    Link(String),
}

impl AnalyticsScope {
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some(code) if !code.is_empty() => Self::Link(code.to_string()),
            _ => Self::Global,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Global => "all links".to_string(),
            Self::Link(code) => format!("/{}", code),
        }
    }
}

/// 数据不满足约定时的描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsAnomaly {
    UniqueExceedsTotal { unique: u64, total: u64 },
    Unsorted(&'static str),
}

impl std::fmt::Display for AnalyticsAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniqueExceedsTotal { unique, total } => {
                write!(f, "uniqueClicks ({}) exceeds totalClicks ({})", unique, total)
            }
            Self::Unsorted(field) => write!(f, "{} is not sorted by clicks descending", field),
        }
    }
}

fn is_descending(clicks: impl Iterator<Item = u64>) -> bool {
    let mut previous = u64::MAX;
    for value in clicks {
        if value > previous {
            return false;
        }
        previous = value;
    }
    true
}

impl AnalyticsData {
    /// 没有任何点击记录
    pub fn has_no_records(&self) -> bool {
        self.total_clicks == 0
            && self.clicks_by_date.is_empty()
            && self.clicks_by_country.is_empty()
            && self.clicks_by_referrer.is_empty()
            && self.top_links.is_empty()
    }

    pub fn anomalies(&self) -> Vec<AnalyticsAnomaly> {
        let mut found = Vec::new();
        if self.unique_clicks > self.total_clicks {
            found.push(AnalyticsAnomaly::UniqueExceedsTotal {
                unique: self.unique_clicks,
                total: self.total_clicks,
            });
        }
        if !is_descending(self.clicks_by_country.iter().map(|c| c.clicks)) {
            found.push(AnalyticsAnomaly::Unsorted("clicksByCountry"));
        }
        if !is_descending(self.clicks_by_referrer.iter().map(|r| r.clicks)) {
            found.push(AnalyticsAnomaly::Unsorted("clicksByReferrer"));
        }
        if !is_descending(self.top_links.iter().map(|l| l.clicks)) {
            found.push(AnalyticsAnomaly::Unsorted("topLinks"));
        }
        found
    }

    /// 收到数据时检查约定，只记录警告，不修改数据
    pub fn warn_on_anomalies(&self, scope: &str) {
        for anomaly in self.anomalies() {
            warn!("Analytics payload for {}: {}", scope, anomaly);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let json = r#"{
            "totalClicks": 120,
            "uniqueClicks": 100,
            "clicksByDate": [{"date": "2024-01-01", "clicks": 20}],
            "clicksByCountry": [{"country": "US", "clicks": 80}, {"country": "DE", "clicks": 40}],
            "clicksByReferrer": [{"referrer": "", "clicks": 70}],
            "topLinks": [{"shortCode": "abc", "originalUrl": "https://example.com", "clicks": 120}]
        }"#;
        let data: AnalyticsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_clicks, 120);
        assert_eq!(data.clicks_by_country.len(), 2);
        assert_eq!(data.clicks_by_referrer[0].referrer, "");
        assert_eq!(data.top_links[0].short_code, "abc");
        assert!(data.anomalies().is_empty());
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let data: AnalyticsData =
            serde_json::from_str(r#"{"totalClicks": 0, "uniqueClicks": 0}"#).unwrap();
        assert!(data.has_no_records());
    }

    #[test]
    fn test_null_referrer_is_direct() {
        let json = r#"{
            "totalClicks": 3,
            "uniqueClicks": 2,
            "clicksByReferrer": [{"referrer": null, "clicks": 2}, {"clicks": 1}]
        }"#;
        let data: AnalyticsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.clicks_by_referrer[0].referrer, "");
        assert_eq!(data.clicks_by_referrer[1].referrer, "");
    }

    #[test]
    fn test_null_payload_is_none() {
        let data: Option<AnalyticsData> = serde_json::from_str("null").unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_scope_from_code() {
        assert_eq!(AnalyticsScope::from_code(None), AnalyticsScope::Global);
        assert_eq!(AnalyticsScope::from_code(Some("  ")), AnalyticsScope::Global);
        assert_eq!(
            AnalyticsScope::from_code(Some("abc")),
            AnalyticsScope::Link("abc".to_string())
        );
    }

    #[test]
    fn test_anomalies_detected() {
        let data = AnalyticsData {
            total_clicks: 5,
            unique_clicks: 9,
            clicks_by_country: vec![
                CountryClicks { country: "US".into(), clicks: 1 },
                CountryClicks { country: "FR".into(), clicks: 3 },
            ],
            ..Default::default()
        };
        let anomalies = data.anomalies();
        assert_eq!(anomalies.len(), 2);
        assert!(anomalies.contains(&AnalyticsAnomaly::Unsorted("clicksByCountry")));
    }
}
