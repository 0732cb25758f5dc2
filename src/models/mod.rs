pub mod analytics;
pub mod link;

pub use analytics::{
    AnalyticsAnomaly, AnalyticsData, AnalyticsScope, CountryClicks, DateClicks, ReferrerClicks, TopLink,
};
pub use link::{CreateLinkRequest, CreateLinkResponse, Link, LinkStatus, is_expired};
