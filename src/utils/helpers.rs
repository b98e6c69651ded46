//! Helper functions and utilities
//!
//! All string heuristics over booking dates and time slots live here so
//! callers never slice booking strings themselves.

use std::sync::OnceLock;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Placeholder shown when a booking has no time slot
pub const EMPTY_TIME_SLOT: &str = "--:--";

fn iso_time_regex() -> &'static Regex {
    static ISO_TIME: OnceLock<Regex> = OnceLock::new();
    ISO_TIME.get_or_init(|| Regex::new(r"T(\d{2}):(\d{2})").expect("time slot pattern is a valid regex"))
}

/// Format a booking time slot as `HH:MM`
///
/// Accepts either a full ISO timestamp (`2024-05-01T14:30:00Z`) or a bare
/// `HH:MM[:SS]` string. Anything else is returned unchanged.
pub fn format_time_slot(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_TIME_SLOT.to_string();
    }

    if raw.contains('T') {
        if let Some(caps) = iso_time_regex().captures(raw) {
            return format!("{}:{}", &caps[1], &caps[2]);
        }
    }

    if raw.contains(':') {
        return raw.chars().take(5).collect();
    }

    raw.to_string()
}

/// Check whether a booking date string falls on `day`
///
/// This is a literal prefix match against `YYYY-MM-DD`, so
/// `2024-05-01T09:00:00Z` matches 2024-05-01 regardless of its offset.
pub fn date_matches_day(date: &str, day: NaiveDate) -> bool {
    date.starts_with(&day.format("%Y-%m-%d").to_string())
}

/// Parse a booking date into a sortable timestamp
///
/// Timestamps are compared by their wall-clock time as written, so
/// `...T23:00:00+03:00` sorts after `...T21:00:00` like the date-prefix
/// match for "today" would suggest. Returns `None` for strings that are
/// neither a calendar date nor a timestamp.
pub fn parse_booking_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
}

/// Format an integer amount with grouped thousands and the rouble sign
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{}₽", grouped)
}

/// Length in UTF-16 code units, the unit of Telegram's message limits
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Escape markdown special characters
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|' | '{' | '}' | '.' | '!' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
