//! Number parsing and display helpers.

use serde_json::Value;

/// Parses a number out of a loosely formatted string.
///
/// Whitespace is trimmed and every character other than digits, `.`, `+`
/// and `-` is dropped. The longest numeric prefix of the remainder is parsed,
/// so `" 33.75° N"` yields `33.75`. Returns `None` when nothing finite remains.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
        .collect();

    (1..=cleaned.len())
        .rev()
        .filter_map(|end| cleaned.get(..end))
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Reads a number from a JSON value that may be a number or a string.
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Formats an integer with `,` thousands separators (`1234567` → `1,234,567`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
