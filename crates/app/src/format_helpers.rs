//! Display formatting for dates coming back from the API.

use chrono::{DateTime, NaiveDate};

/// "Mar 14, 2021".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an RFC 3339 timestamp as "Mar 14, 2021 9:05 PM" (UTC).
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => ts.naive_utc().format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Phone numbers are optional; show a dash when missing.
pub fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}
