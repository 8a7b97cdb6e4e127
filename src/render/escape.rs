//! Escaping for hand-assembled markup.
//!
//! Askama templates escape their own expressions; these helpers cover the
//! few strings that are built outside a template and then emitted with
//! `|safe`. Each value must pass through exactly one escaping step.

/// Replaces `& < > " '` with their entities.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a value for use inside an `id`: HTML-escaped, whitespace runs
/// replaced with `-`.
pub fn escape_attr(raw: &str) -> String {
    let escaped = escape_html(raw);
    let mut out = String::with_capacity(escaped.len());
    let mut in_space = false;
    for ch in escaped.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_is_total() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escaped_output_has_no_raw_specials() {
        let out = escape_html("&&<<>>\"\"''");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
        assert_eq!(out.matches('&').count(), 10);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Café du Monde"), "Café du Monde");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("Joe's  Place\tATL"), "Joe&#039;s-Place-ATL");
    }
}
