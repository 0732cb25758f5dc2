//! 缓存 key，与对应的 API 路径一致

use crate::models::AnalyticsScope;

pub const LINKS: &str = "/api/links";
pub const ANALYTICS: &str = "/api/analytics";

/// 短码放入路径前做百分号编码
pub fn link(code: &str) -> String {
    format!("{}/{}", LINKS, urlencoding::encode(code))
}

pub fn analytics(scope: &AnalyticsScope) -> String {
    match scope {
        AnalyticsScope::Global => ANALYTICS.to_string(),
        AnalyticsScope::Link(code) => format!("{}/{}", ANALYTICS, urlencoding::encode(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_api_paths() {
        assert_eq!(link("abc"), "/api/links/abc");
        assert_eq!(analytics(&AnalyticsScope::Global), "/api/analytics");
        assert_eq!(
            analytics(&AnalyticsScope::Link("abc".into())),
            "/api/analytics/abc"
        );
    }

    #[test]
    fn test_codes_are_encoded() {
        assert_eq!(link("a b/c"), "/api/links/a%20b%2Fc");
    }
}
