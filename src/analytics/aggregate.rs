//! 点击统计的派生计算：点击率、比例宽度、截断

use crate::models::{CountryClicks, DateClicks, ReferrerClicks, TopLink};

/// 每个 breakdown 最多展示的条目数
pub const DISPLAY_LIMIT: usize = 5;
/// 每日趋势展示的天数
pub const TREND_DAYS: usize = 7;
/// 空 referrer 的展示名
pub const DIRECT_LABEL: &str = "Direct";

/// 独立点击占比，`total == 0` 时为 0
pub fn click_rate(total_clicks: u64, unique_clicks: u64) -> f64 {
    if total_clicks == 0 {
        0.0
    } else {
        unique_clicks as f64 / total_clicks as f64
    }
}

/// `"83.3%"`；没有点击时为字面量 `"0%"`
pub fn format_click_rate(total_clicks: u64, unique_clicks: u64) -> String {
    if total_clicks == 0 {
        "0%".to_string()
    } else {
        format!("{:.1}%", click_rate(total_clicks, unique_clicks) * 100.0)
    }
}

/// 相对第一项的比例宽度（百分比）
///
/// 第一项恰好为 100；第一项为 0 时全部为 0；结果限制在 `[0, 100]`。
pub fn bar_widths(clicks: &[u64]) -> Vec<f64> {
    let Some(&first) = clicks.first() else {
        return Vec::new();
    };
    if first == 0 {
        return vec![0.0; clicks.len()];
    }
    clicks
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i == 0 {
                100.0
            } else {
                (c as f64 / first as f64 * 100.0).clamp(0.0, 100.0)
            }
        })
        .collect()
}

pub fn referrer_label(referrer: &str) -> &str {
    if referrer.is_empty() {
        DIRECT_LABEL
    } else {
        referrer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub clicks: u64,
    pub width_percent: f64,
}

/// 一个 breakdown 的展示状态
#[derive(Debug, Clone, PartialEq)]
pub enum Breakdown {
    /// 序列为空
    NoData,
    Rows(Vec<BreakdownRow>),
}

impl Breakdown {
    /// 宽度相对完整序列的第一项计算，再截断到 `limit` 条
    fn from_pairs(pairs: Vec<(String, u64)>, limit: usize) -> Self {
        if pairs.is_empty() {
            return Self::NoData;
        }
        let clicks: Vec<u64> = pairs.iter().map(|(_, c)| *c).collect();
        let widths = bar_widths(&clicks);
        Self::Rows(
            pairs
                .into_iter()
                .zip(widths)
                .take(limit)
                .map(|((label, clicks), width_percent)| BreakdownRow {
                    label,
                    clicks,
                    width_percent,
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[BreakdownRow] {
        match self {
            Self::NoData => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

pub fn country_breakdown(countries: &[CountryClicks]) -> Breakdown {
    Breakdown::from_pairs(
        countries
            .iter()
            .map(|c| (c.country.clone(), c.clicks))
            .collect(),
        DISPLAY_LIMIT,
    )
}

/// 数据中保持空字符串，只在展示时替换为 `Direct`
pub fn referrer_breakdown(referrers: &[ReferrerClicks]) -> Breakdown {
    Breakdown::from_pairs(
        referrers
            .iter()
            .map(|r| (referrer_label(&r.referrer).to_string(), r.clicks))
            .collect(),
        DISPLAY_LIMIT,
    )
}

/// 最近 `TREND_DAYS` 天，按日期升序；宽度相对其中的最大值
pub fn daily_trend(by_date: &[DateClicks]) -> Breakdown {
    if by_date.is_empty() {
        return Breakdown::NoData;
    }
    let mut sorted: Vec<&DateClicks> = by_date.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    let recent = &sorted[sorted.len().saturating_sub(TREND_DAYS)..];

    let max = recent.iter().map(|d| d.clicks).max().unwrap_or(0);
    Breakdown::Rows(
        recent
            .iter()
            .map(|d| BreakdownRow {
                label: d.date.clone(),
                clicks: d.clicks,
                width_percent: if max == 0 {
                    0.0
                } else {
                    d.clicks as f64 / max as f64 * 100.0
                },
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLinkRow {
    /// 从 1 开始
    pub rank: usize,
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
}

pub fn top_link_rows(top_links: &[TopLink]) -> Vec<TopLinkRow> {
    top_links
        .iter()
        .take(DISPLAY_LIMIT)
        .enumerate()
        .map(|(i, link)| TopLinkRow {
            rank: i + 1,
            short_code: link.short_code.clone(),
            original_url: link.original_url.clone(),
            clicks: link.clicks,
        })
        .collect()
}

/// 文本进度条，`cells` 为总宽度
pub fn render_bar(width_percent: f64, cells: usize) -> String {
    let filled = ((width_percent.clamp(0.0, 100.0) / 100.0) * cells as f64).round() as usize;
    let filled = filled.min(cells);
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_rate_formatting() {
        assert_eq!(format_click_rate(0, 0), "0%");
        assert_eq!(format_click_rate(120, 100), "83.3%");
        assert_eq!(format_click_rate(10, 10), "100.0%");
        assert_eq!(click_rate(0, 5), 0.0);
    }

    #[test]
    fn test_bar_widths_relative_to_first() {
        assert_eq!(bar_widths(&[80, 40, 20]), vec![100.0, 50.0, 25.0]);
        assert!(bar_widths(&[]).is_empty());
    }

    #[test]
    fn test_bar_widths_degenerate() {
        assert_eq!(bar_widths(&[0, 0]), vec![0.0, 0.0]);
        // 未排序时不超过 100
        assert_eq!(bar_widths(&[10, 30]), vec![100.0, 100.0]);
    }

    #[test]
    fn test_direct_referrer() {
        let breakdown = referrer_breakdown(&[
            ReferrerClicks {
                referrer: String::new(),
                clicks: 70,
            },
            ReferrerClicks {
                referrer: "news.ycombinator.com".into(),
                clicks: 35,
            },
        ]);
        let rows = breakdown.rows();
        assert_eq!(rows[0].label, "Direct");
        assert_eq!(rows[0].width_percent, 100.0);
        assert_eq!(rows[1].width_percent, 50.0);
    }

    #[test]
    fn test_breakdown_truncates_display() {
        let countries: Vec<CountryClicks> = (0..8)
            .map(|i| CountryClicks {
                country: format!("C{}", i),
                clicks: 100 - i,
            })
            .collect();
        let breakdown = country_breakdown(&countries);
        assert_eq!(breakdown.rows().len(), DISPLAY_LIMIT);
        assert_eq!(breakdown.rows()[0].width_percent, 100.0);
    }

    #[test]
    fn test_empty_breakdown_is_no_data() {
        assert!(country_breakdown(&[]).is_no_data());
        assert!(daily_trend(&[]).is_no_data());
    }

    #[test]
    fn test_daily_trend_keeps_last_days() {
        let days: Vec<DateClicks> = (1..=10)
            .rev()
            .map(|d| DateClicks {
                date: format!("2024-01-{:02}", d),
                clicks: d,
            })
            .collect();
        let trend = daily_trend(&days);
        let rows = trend.rows();
        assert_eq!(rows.len(), TREND_DAYS);
        assert_eq!(rows[0].label, "2024-01-04");
        assert_eq!(rows[6].label, "2024-01-10");
        assert_eq!(rows[6].width_percent, 100.0);
    }

    #[test]
    fn test_top_link_ranks() {
        let links: Vec<TopLink> = (0..7)
            .map(|i| TopLink {
                short_code: format!("c{}", i),
                original_url: "https://example.com".into(),
                clicks: 10 - i,
            })
            .collect();
        let rows = top_link_rows(&links);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[4].short_code, "c4");
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(100.0, 4), "████");
        assert_eq!(render_bar(50.0, 4), "██░░");
        assert_eq!(render_bar(0.0, 4), "░░░░");
        assert_eq!(render_bar(250.0, 4), "████");
    }
}
