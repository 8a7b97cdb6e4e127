//! Date and text formatting.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Card snippet length, in characters.
pub const SNIPPET_CHARS: usize = 150;

/// Parses an API timestamp into display-local time.
///
/// Offset-aware timestamps (RFC 3339, RFC 2822) are shifted into
/// `display_offset`; naive timestamps and plain dates are taken as already
/// local.
pub fn parse_timestamp(raw: &str, display_offset: FixedOffset) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let aware = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw));
    if let Ok(dt) = aware {
        return Some(dt.with_timezone(&display_offset).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Long form used on article pages: `October 05, 2025 at 03:04 PM`.
pub fn detail_date(raw: &str, display_offset: FixedOffset) -> Option<String> {
    parse_timestamp(raw, display_offset).map(|dt| dt.format("%B %d, %Y at %I:%M %p").to_string())
}

/// Compact form used in admin tables: `2025-10-05 15:04`.
///
/// Unparseable input is shown as-is; missing input is empty.
pub fn admin_date(raw: Option<&str>, display_offset: FixedOffset) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => String::new(),
        Some(raw) => parse_timestamp(raw, display_offset)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Cuts `text` to `max` characters, appending `…` when anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Title-cases each word: `ice cream` → `Ice Cream`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
