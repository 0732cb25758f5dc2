//! Shared formatting for link commands

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::interfaces::cli::CliError;
use crate::models::{Link, LinkStatus};
use crate::utils::TimeParser;

pub(crate) fn status_badge(status: LinkStatus) -> ColoredString {
    match status {
        LinkStatus::Active => status.label().green().bold(),
        LinkStatus::Expired => status.label().red().bold(),
    }
}

/// 过期描述，没有过期时间时返回 `None`
pub(crate) fn expiry_text(link: &Link, now: DateTime<Utc>) -> Option<String> {
    let raw = link.expires_at.as_deref()?;
    Some(match link.expires_at_parsed() {
        Some(expires_at) if expires_at < now => {
            format!("expired {}", TimeParser::format_date(expires_at))
        }
        Some(expires_at) => format!(
            "expires {} (in {})",
            TimeParser::format_date(expires_at),
            TimeParser::format_duration_human(now, expires_at)
        ),
        None => format!("expires {}", raw),
    })
}

/// 列表中的一行
pub(crate) fn format_link_line(link: &Link, now: DateTime<Utc>) -> String {
    let mut info_parts = vec![
        format!("[{}]", status_badge(link.status_at(now))),
        format!(
            "{} -> {}",
            link.short_code.cyan(),
            link.original_url.blue().underline()
        ),
    ];

    if let Some(expiry) = expiry_text(link, now) {
        info_parts.push(format!("({})", expiry).dimmed().yellow().to_string());
    }

    info_parts.push(
        format!("(clicks: {})", link.clicks)
            .dimmed()
            .cyan()
            .to_string(),
    );
    info_parts.push(format!("created {}", link.created_label()).dimmed().to_string());

    info_parts.join(" ")
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::CommandError(format!("Failed to encode JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn link(expires_at: Option<&str>) -> Link {
        Link {
            id: "1".into(),
            short_code: "docs".into(),
            original_url: "https://example.com/docs".into(),
            short_url: "http://localhost:8080/docs".into(),
            clicks: 12,
            created_at: "2024-01-05T08:00:00Z".into(),
            expires_at: expires_at.map(String::from),
        }
    }

    #[test]
    fn test_expiry_text() {
        colored::control::set_override(false);
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();

        assert_eq!(expiry_text(&link(None), now), None);
        assert_eq!(
            expiry_text(&link(Some("2024-01-12T03:00:00Z")), now).as_deref(),
            Some("expires Jan 12, 2024 (in 2d 3h)")
        );
        assert_eq!(
            expiry_text(&link(Some("2024-01-09T00:00:00Z")), now).as_deref(),
            Some("expired Jan 9, 2024")
        );
    }

    #[test]
    fn test_link_line_shows_status() {
        colored::control::set_override(false);
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();

        let active = format_link_line(&link(None), now);
        assert!(active.starts_with("[Active] docs -> https://example.com/docs"));
        assert!(active.contains("(clicks: 12)"));

        let expired = format_link_line(&link(Some("2024-01-09T00:00:00Z")), now);
        assert!(expired.starts_with("[Expired]"));
    }
}
