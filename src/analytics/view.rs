//! 统计面板的展示模型，CLI 与 TUI 共用

use super::aggregate::{
    Breakdown, TopLinkRow, country_breakdown, daily_trend, format_click_rate, referrer_breakdown,
    top_link_rows,
};
use crate::models::AnalyticsData;
use crate::utils::format_count;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub total_clicks: String,
    pub unique_clicks: String,
    pub click_rate: String,
    pub countries: Breakdown,
    pub referrers: Breakdown,
    pub top_links: Vec<TopLinkRow>,
    pub trend: Breakdown,
}

impl AnalyticsView {
    pub fn from_data(data: &AnalyticsData) -> Self {
        Self {
            total_clicks: format_count(data.total_clicks),
            unique_clicks: format_count(data.unique_clicks),
            click_rate: format_click_rate(data.total_clicks, data.unique_clicks),
            countries: country_breakdown(&data.clicks_by_country),
            referrers: referrer_breakdown(&data.clicks_by_referrer),
            top_links: top_link_rows(&data.top_links),
            trend: daily_trend(&data.clicks_by_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountryClicks, ReferrerClicks};

    #[test]
    fn test_view_from_data() {
        let data = AnalyticsData {
            total_clicks: 1200,
            unique_clicks: 1000,
            clicks_by_country: vec![CountryClicks {
                country: "US".into(),
                clicks: 800,
            }],
            clicks_by_referrer: vec![ReferrerClicks {
                referrer: String::new(),
                clicks: 1200,
            }],
            ..Default::default()
        };
        let view = AnalyticsView::from_data(&data);
        assert_eq!(view.total_clicks, "1,200");
        assert_eq!(view.unique_clicks, "1,000");
        assert_eq!(view.click_rate, "83.3%");
        assert_eq!(view.referrers.rows()[0].label, "Direct");
        assert!(view.top_links.is_empty());
        assert!(view.trend.is_no_data());
    }
}
