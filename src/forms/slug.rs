//! Slug generation and the title → slug auto-fill.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Already URL-safe: lowercase alphanumeric runs joined by single hyphens.
pub static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// `"Café du Monde!"` → `"cafe-du-monde"`.
pub fn slugify(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    NON_ALNUM
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

pub fn is_url_safe(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// Slug input that follows the title until edited by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugField {
    value: String,
    user_edited: bool,
}

impl SlugField {
    /// Field as the page last reported it.
    pub fn restore(value: impl Into<String>, user_edited: bool) -> Self {
        Self {
            value: value.into(),
            user_edited,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_user_edited(&self) -> bool {
        self.user_edited
    }

    /// Title changed. Returns the new slug when it was auto-filled.
    pub fn title_input(&mut self, title: &str) -> Option<&str> {
        if self.user_edited {
            return None;
        }
        self.value = slugify(title);
        Some(&self.value)
    }

    /// Slug typed by hand; from now on the title no longer drives it.
    pub fn slug_input(&mut self, value: &str) {
        self.value = value.to_string();
        self.user_edited = true;
    }

    /// Fills a blank slug from the title right before submission.
    pub fn fill_if_blank(&mut self, title: &str) -> &str {
        if self.value.trim().is_empty() {
            self.value = slugify(title);
        }
        &self.value
    }
}
