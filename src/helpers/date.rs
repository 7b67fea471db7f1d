//! Date helper functions

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

/// Parse a front-matter `publishedAt` value
///
/// Bare dates are treated as midnight.
pub fn parse_published_at(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // RFC 3339 / ISO 8601 with an offset
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Format a publication date like `January 15, 2024`
///
/// With `include_relative`, a coarse age is appended: `January 15, 2024 (2y ago)`.
/// Unparseable input is returned unchanged.
pub fn format_date(date: &str, include_relative: bool) -> String {
    format_date_from(date, include_relative, Local::now().date_naive())
}

/// [`format_date`] relative to a fixed `today`
pub fn format_date_from(date: &str, include_relative: bool, today: NaiveDate) -> String {
    let Some(target) = parse_published_at(date) else {
        return date.to_string();
    };

    let full_date = target.format("%B %-d, %Y").to_string();
    if !include_relative {
        return full_date;
    }

    format!("{} ({})", full_date, age(target.date(), today))
}

/// Calendar-field age: years, then months, then days
fn age(target: NaiveDate, today: NaiveDate) -> String {
    let years = today.year() - target.year();
    let months = today.month() as i32 - target.month() as i32;
    let days = today.day() as i32 - target.day() as i32;

    if years > 0 {
        format!("{}y ago", years)
    } else if months > 0 {
        format!("{}mo ago", months)
    } else if days > 0 {
        format!("{}d ago", days)
    } else {
        "Today".to_string()
    }
}

/// Get relative time (like "2 hours ago")
pub fn relative_time(timestamp: &DateTime<Utc>) -> String {
    relative_time_from(timestamp, &Utc::now())
}

/// [`relative_time`] relative to a fixed `now`
pub fn relative_time_from(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let units = [
        (60 * 60, 60, "minute"),
        (60 * 60 * 24, 60 * 60, "hour"),
        (60 * 60 * 24 * 7, 60 * 60 * 24, "day"),
        (60 * 60 * 24 * 28, 60 * 60 * 24 * 7, "week"),
    ];
    for (limit, size, unit) in units {
        if seconds < limit {
            return plural(seconds / size, unit);
        }
    }

    // 28 and 29 days are past the week range but floor to zero 30-day months
    let months = (seconds / (60 * 60 * 24 * 30)).max(1);
    if months < 12 {
        return plural(months, "month");
    }
    plural(seconds / (60 * 60 * 24 * 365), "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_parse_published_at() {
        let dt = parse_published_at("2024-01-15").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 00:00");

        let dt = parse_published_at("2024-01-15T09:30:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "09:30");

        assert!(parse_published_at("2024-01-15T09:30:00Z").is_some());
        assert!(parse_published_at("last tuesday").is_none());
    }

    #[test]
    fn test_format_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(format_date_from("2024-01-05", false, today), "January 5, 2024");
        assert_eq!(
            format_date_from("2022-01-05", true, today),
            "January 5, 2022 (2y ago)"
        );
        assert_eq!(
            format_date_from("2024-01-05", true, today),
            "January 5, 2024 (2mo ago)"
        );
        assert_eq!(
            format_date_from("2024-03-18", true, today),
            "March 18, 2024 (2d ago)"
        );
        assert_eq!(
            format_date_from("2024-03-20T12:00:00", true, today),
            "March 20, 2024 (Today)"
        );
        assert_eq!(format_date_from("soon", true, today), "soon");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ago = |d: Duration| relative_time_from(&(now - d), &now);

        assert_eq!(ago(Duration::seconds(30)), "just now");
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(45)), "45 minutes ago");
        assert_eq!(ago(Duration::hours(1)), "1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "5 hours ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(14)), "2 weeks ago");
        assert_eq!(ago(Duration::days(90)), "3 months ago");
        assert_eq!(ago(Duration::days(400)), "1 year ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn test_relative_time_never_says_zero_months() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ago = |d: Duration| relative_time_from(&(now - d), &now);

        assert_eq!(ago(Duration::days(27)), "3 weeks ago");
        assert_eq!(ago(Duration::days(28)), "1 month ago");
        assert_eq!(ago(Duration::days(29)), "1 month ago");
        assert_eq!(ago(Duration::days(30)), "1 month ago");
        assert_eq!(ago(Duration::days(60)), "2 months ago");
    }
}
