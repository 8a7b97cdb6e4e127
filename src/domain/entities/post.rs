//! Post entity shared by the blog and news sections.

use serde::{Deserialize, Serialize};

use super::content::Content;
use crate::utils::encode::encode_component;
use crate::utils::lenient;

/// Which section of the site a post belongs to.
///
/// Blog and news posts share one shape but live under different public
/// routes and API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Blog,
    News,
}

impl PostKind {
    /// Public route prefix for post pages (`/blog`, `/news`).
    pub fn route(self) -> &'static str {
        match self {
            PostKind::Blog => "/blog",
            PostKind::News => "/news",
        }
    }

    /// API resource name for the post collection.
    pub fn resource(self) -> &'static str {
        match self {
            PostKind::Blog => "blog-posts",
            PostKind::News => "news-posts",
        }
    }

    /// Path segment used by the relation endpoints (`/api/v1/{segment}/{id}/related`).
    pub fn segment(self) -> &'static str {
        match self {
            PostKind::Blog => "blog",
            PostKind::News => "news",
        }
    }
}

/// Engagement counters attached to a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Analytics {
    #[serde(default, deserialize_with = "lenient::count")]
    pub views: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub likes: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub comments: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub shares: u64,
}

/// A blog or news article as returned by the API.
///
/// Every field is optional: list endpoints, relation endpoints and the
/// analytics views each return a different subset.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Post {
    #[serde(default, alias = "id", deserialize_with = "lenient::id")]
    pub post_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author_first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub analytics: Option<Analytics>,
}

impl Post {
    /// Title, or `fallback` when the post has none.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    /// Public link to the post.
    ///
    /// Slug routes are preferred; posts without a slug fall back to the
    /// numeric id, and posts with neither link to `#`.
    pub fn href(&self, kind: PostKind) -> String {
        if let Some(slug) = &self.slug {
            format!("{}/{}", kind.route(), encode_component(slug))
        } else if let Some(id) = self.post_id {
            format!("{}/{}", kind.route(), id)
        } else {
            "#".to_string()
        }
    }

    /// First paragraph of the body, used for card snippets.
    pub fn snippet(&self) -> Option<&str> {
        self.content.as_ref().and_then(Content::first_paragraph)
    }

    /// Comment counter, zero when analytics are missing.
    pub fn comment_count(&self) -> u64 {
        self.analytics.map(|a| a.comments).unwrap_or(0)
    }
}
