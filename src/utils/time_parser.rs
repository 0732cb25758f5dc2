use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// 时间相关的解析与格式化
pub struct TimeParser;

/// 过期时间上限（小时），与后端的 i32 字段保持一致
pub const MAX_EXPIRES_IN_HOURS: u32 = i32::MAX as u32;

impl TimeParser {
    /// 解析 "多少小时后过期"，支持多种格式：
    /// - 小时数：24, 1.5（向上取整）
    /// - 相对时间：1d, 2w, 3M, 1y, 1h30m, 2d12h（向上取整到小时）
    pub fn parse_expires_in_hours(input: &str) -> Result<u32, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("Expiration cannot be empty".to_string());
        }

        let hours = if let Ok(value) = input.parse::<f64>() {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Expiration must be a positive number, got '{}'", input));
            }
            value.ceil()
        } else {
            let duration = Self::parse_relative_duration(input)?;
            (duration.num_seconds() as f64 / 3600.0).ceil()
        };

        if hours > MAX_EXPIRES_IN_HOURS as f64 {
            return Err(format!("Expiration '{}' is too far in the future", input));
        }
        Ok(hours as u32)
    }

    /// 解析相对时间，如 `1d2h30m`
    pub fn parse_relative_duration(input: &str) -> Result<Duration, String> {
        let mut total_duration = Duration::zero();
        let mut remaining = input.trim();

        while !remaining.is_empty() {
            let num_len = remaining
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(remaining.len());
            if num_len == 0 {
                return Err(format!("Invalid duration: '{}'", input));
            }
            let num: i64 = remaining[..num_len]
                .parse()
                .map_err(|_| format!("Invalid number: '{}'", &remaining[..num_len]))?;
            remaining = &remaining[num_len..];

            let unit_len = remaining
                .find(|c: char| !c.is_alphabetic())
                .unwrap_or(remaining.len());
            if unit_len == 0 {
                return Err(format!("Missing time unit after '{}'", num));
            }
            let unit = &remaining[..unit_len];

            // "M" 是月，"m" 是分钟，其余单位不区分大小写
            let duration = match unit {
                "M" => num.checked_mul(30).and_then(Duration::try_days),
                _ => match unit.to_lowercase().as_str() {
                    "s" | "sec" | "second" | "seconds" => Duration::try_seconds(num),
                    "m" | "min" | "minute" | "minutes" => Duration::try_minutes(num),
                    "h" | "hour" | "hours" => Duration::try_hours(num),
                    "d" | "day" | "days" => Duration::try_days(num),
                    "w" | "week" | "weeks" => Duration::try_weeks(num),
                    "month" | "months" => num.checked_mul(30).and_then(Duration::try_days),
                    "y" | "year" | "years" => num.checked_mul(365).and_then(Duration::try_days),
                    _ => return Err(format!("Unsupported time unit: '{}'", unit)),
                },
            }
            .ok_or_else(|| format!("Duration '{}' is out of range", input))?;

            total_duration = total_duration
                .checked_add(&duration)
                .ok_or_else(|| format!("Duration '{}' is out of range", input))?;
            remaining = &remaining[unit_len..];
        }

        if total_duration <= Duration::zero() {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(total_duration)
    }

    /// 解析服务端返回的 ISO-8601 时间戳
    ///
    /// 支持：
    /// - RFC3339：`2024-01-01T00:00:00Z`
    /// - 扩展年份：`+002024-01-01T00:00:00.000000000Z`
    /// - 无时区（按 UTC）：`2024-01-01T00:00:00`
    /// - 纯日期（按 UTC 零点）：`2024-01-01`
    pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
        let input = input.trim();
        let normalized = Self::strip_expanded_year(input);
        let input = normalized.as_deref().unwrap_or(input);

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
        None
    }

    /// `+002024-...` -> `2024-...`
    fn strip_expanded_year(input: &str) -> Option<String> {
        let rest = input.strip_prefix('+')?;
        let year = rest.get(..6)?;
        if !year.bytes().all(|b| b.is_ascii_digit()) || rest.as_bytes().get(6) != Some(&b'-') {
            return None;
        }
        let year: u32 = year.parse().ok()?;
        if year > 9999 {
            return None;
        }
        Some(format!("{:04}{}", year, &rest[6..]))
    }

    /// 列表中的日期展示，如 `Jan 5, 2024`
    pub fn format_date(dt: DateTime<Utc>) -> String {
        dt.format("%b %-d, %Y").to_string()
    }

    /// 格式化持续时间为人类可读的字符串
    pub fn format_duration_human(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
        let duration = to.signed_duration_since(from);

        if duration.num_seconds() <= 0 {
            return "expired".to_string();
        }

        let days = duration.num_days();
        let hours = (duration.num_seconds() % 86400) / 3600;
        let minutes = (duration.num_seconds() % 3600) / 60;

        if days > 0 {
            if hours > 0 {
                format!("{}d {}h", days, hours)
            } else {
                format!("{}d", days)
            }
        } else if hours > 0 {
            if minutes > 0 {
                format!("{}h {}m", hours, minutes)
            } else {
                format!("{}h", hours)
            }
        } else if minutes > 0 {
            format!("{}m", minutes)
        } else {
            format!("{}s", duration.num_seconds())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expires_in_plain_hours() {
        assert_eq!(TimeParser::parse_expires_in_hours("24"), Ok(24));
        assert_eq!(TimeParser::parse_expires_in_hours(" 1 "), Ok(1));
        assert_eq!(TimeParser::parse_expires_in_hours("1.5"), Ok(2));
    }

    #[test]
    fn test_expires_in_relative() {
        assert_eq!(TimeParser::parse_expires_in_hours("1d"), Ok(24));
        assert_eq!(TimeParser::parse_expires_in_hours("2w"), Ok(336));
        assert_eq!(TimeParser::parse_expires_in_hours("1d12h"), Ok(36));
        // 不足一小时向上取整
        assert_eq!(TimeParser::parse_expires_in_hours("30m"), Ok(1));
        assert_eq!(TimeParser::parse_expires_in_hours("1M"), Ok(720));
    }

    #[test]
    fn test_expires_in_rejects_non_positive() {
        assert!(TimeParser::parse_expires_in_hours("0").is_err());
        assert!(TimeParser::parse_expires_in_hours("-3").is_err());
        assert!(TimeParser::parse_expires_in_hours("0d").is_err());
        assert!(TimeParser::parse_expires_in_hours("").is_err());
    }

    #[test]
    fn test_expires_in_rejects_garbage() {
        assert!(TimeParser::parse_expires_in_hours("soon").is_err());
        assert!(TimeParser::parse_expires_in_hours("1x").is_err());
        assert!(TimeParser::parse_expires_in_hours("d1").is_err());
        assert!(TimeParser::parse_expires_in_hours("NaN").is_err());
        assert!(TimeParser::parse_expires_in_hours("99999999999999999y").is_err());
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let dt = TimeParser::parse_timestamp("2024-03-01T10:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());

        let dt = TimeParser::parse_timestamp("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_expanded_year() {
        let dt = TimeParser::parse_timestamp("+002024-03-01T10:00:00.000000000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_naive_and_date() {
        let dt = TimeParser::parse_timestamp("2024-03-01T10:00:00.250").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
        let dt = TimeParser::parse_timestamp("2024-03-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(TimeParser::parse_timestamp("").is_none());
        assert!(TimeParser::parse_timestamp("yesterday").is_none());
        assert!(TimeParser::parse_timestamp("+0020x4-01-01T00:00:00Z").is_none());
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
        assert_eq!(TimeParser::format_date(dt), "Jan 5, 2024");
    }

    #[test]
    fn test_format_duration_human() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            TimeParser::format_duration_human(from, from + Duration::hours(50)),
            "2d 2h"
        );
        assert_eq!(
            TimeParser::format_duration_human(from, from + Duration::minutes(90)),
            "1h 30m"
        );
        assert_eq!(
            TimeParser::format_duration_human(from, from - Duration::minutes(1)),
            "expired"
        );
    }
}
