//! URI component encoding.

/// Percent-encodes a string for use as a single URL path segment or query value.
///
/// Leaves the characters `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched and encodes
/// every other UTF-8 byte as `%XX`.
///
/// # Examples
///
/// ```
/// use page_hydrator::utils::encode::encode_component;
///
/// assert_eq!(encode_component("café du monde"), "caf%C3%A9%20du%20monde");
/// assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
/// ```
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_untouched() {
        assert_eq!(encode_component("my-post_1.html"), "my-post_1.html");
    }

    #[test]
    fn test_reserved_encoded() {
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_component("#hash"), "%23hash");
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
