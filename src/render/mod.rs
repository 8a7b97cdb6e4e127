//! HTML fragment renderers.
//!
//! Renderers are pure: they take decoded view-models and return markup (or
//! patches) ready to inject. Every text value is escaped exactly once, either
//! by askama or by [`escape::escape_html`] for hand-built markup.

pub mod admin_table;
pub mod article;
pub mod assets;
pub mod carousel;
pub mod escape;
pub mod format;
pub mod home;
pub mod lists;
pub mod places;
pub mod sections;

use chrono::{FixedOffset, Offset, Utc};

/// Page-independent rendering settings.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Prefix for relative image paths, with a trailing slash.
    pub static_base: String,
    /// Offset dates are displayed in.
    pub display_offset: FixedOffset,
    /// CSRF token forwarded into admin delete forms.
    pub csrf_token: Option<String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            static_base: "/static/".to_string(),
            display_offset: Utc.fix(),
            csrf_token: None,
        }
    }
}

impl RenderContext {
    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token;
        self
    }
}
