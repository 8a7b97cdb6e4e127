//! Image URL resolution.

use crate::domain::entities::Post;

/// Fallback image for most-read cards without one.
pub const MOST_READ_DEFAULT_IMAGE: &str = "images/post_img_1.png";
/// Fallback thumbnail for search results without one.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// Resolves a stored image path against the static base.
///
/// Absolute `http(s)` URLs are kept; anything else becomes
/// `<static_base><path>` with leading slashes stripped. Empty stays empty.
pub fn resolve_image(path: &str, static_base: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    if is_absolute(path) {
        return path.to_string();
    }
    format!("{}{}", static_base, path.trim_start_matches('/'))
}

/// Image for a post: an explicit `image_url` wins, then `image`, then `default`.
pub fn post_image(post: &Post, static_base: &str, default: &str) -> String {
    if let Some(url) = &post.image_url {
        return url.clone();
    }
    resolve_image(post.image.as_deref().unwrap_or(default), static_base)
}

/// Thumbnail for a search result.
///
/// Paths already under the static prefix are not prefixed twice; missing
/// images get the placeholder.
pub fn thumbnail(img: Option<&str>, static_base: &str) -> String {
    let Some(img) = img.map(str::trim).filter(|s| !s.is_empty()) else {
        return format!("{}{}", static_base, PLACEHOLDER_IMAGE);
    };
    if is_absolute(img) {
        return img.to_string();
    }
    let path = img.trim_start_matches('/');
    let prefix = static_base.trim_start_matches('/');
    if !prefix.is_empty() && path.starts_with(prefix) {
        format!("/{path}")
    } else {
        format!("{static_base}{path}")
    }
}

fn is_absolute(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/static/";

    #[test]
    fn test_resolve_image() {
        assert_eq!(resolve_image("", BASE), "");
        assert_eq!(resolve_image("//images/a.png", BASE), "/static/images/a.png");
        assert_eq!(
            resolve_image("HTTPS://cdn.example.com/a.png", BASE),
            "HTTPS://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_post_image_precedence() {
        let mut post = Post {
            image: Some("images/a.png".to_string()),
            ..Default::default()
        };
        assert_eq!(post_image(&post, BASE, ""), "/static/images/a.png");

        post.image_url = Some("https://cdn/x.png".to_string());
        assert_eq!(post_image(&post, BASE, ""), "https://cdn/x.png");

        assert_eq!(
            post_image(&Post::default(), BASE, MOST_READ_DEFAULT_IMAGE),
            "/static/images/post_img_1.png"
        );
        assert_eq!(post_image(&Post::default(), BASE, ""), "");
    }

    #[test]
    fn test_thumbnail() {
        assert_eq!(thumbnail(None, BASE), "/static/images/placeholder.png");
        assert_eq!(thumbnail(Some("/static/img/a.jpg"), BASE), "/static/img/a.jpg");
        assert_eq!(thumbnail(Some("img/a.jpg"), BASE), "/static/img/a.jpg");
    }
}
