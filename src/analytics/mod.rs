//! Analytics aggregation for display
//!
//! Raw payloads are fetched in full; this module derives percentages,
//! proportional bar widths and the truncated rows shown to the user.

mod aggregate;
mod view;

pub use aggregate::{
    Breakdown, BreakdownRow, DIRECT_LABEL, DISPLAY_LIMIT, TREND_DAYS, TopLinkRow, bar_widths,
    click_rate, country_breakdown, daily_trend, format_click_rate, referrer_breakdown,
    referrer_label, render_bar, top_link_rows,
};
pub use view::AnalyticsView;
