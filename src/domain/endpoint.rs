//! Upstream REST endpoints.
//!
//! Every request the hydrator makes is described by an [`Endpoint`]; the
//! repository only joins [`Endpoint::path_and_query`] onto the configured
//! API base URL.

use crate::domain::entities::PostKind;
use crate::utils::encode::encode_component;

/// Common list query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub include_content: Option<bool>,
}

impl ListQuery {
    pub fn per_page(per_page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_content(mut self) -> Self {
        self.include_content = Some(true);
        self
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(include) = self.include_content {
            pairs.push(("include_content", include.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/v1/{resource}`
    List { resource: String, query: ListQuery },
    /// `GET /api/v1/{blog,news}-posts/{ident}?include_content=true`
    Post { kind: PostKind, ident: String },
    /// `/api/v1/{blog,news}-posts/{id}`, the target of updates.
    PostItem { kind: PostKind, id: i64 },
    /// `GET /api/v1/{blog,news}/{ident}/read-next`
    ReadNext { kind: PostKind, ident: String },
    /// `GET /api/v1/{blog,news}/{ident}/related`
    Related { kind: PostKind, ident: String },
    /// `GET /api/v1/analytics/most-read/{blog,news}`
    MostRead(PostKind),
    /// `GET /api/v1/analytics/latest-{blog,news}`
    Latest { kind: PostKind, query: ListQuery },
    /// `GET /api/v1/news-main?active=1&include_content=true`
    NewsMain,
    /// `GET /api/atl-places`, carrying the page's own query string.
    AllPlaces { query: Option<String> },
    /// `GET /api/search/places?q=`
    SearchPlaces { q: String },
}

impl Endpoint {
    pub fn list(resource: impl Into<String>, query: ListQuery) -> Self {
        Endpoint::List {
            resource: resource.into(),
            query,
        }
    }

    /// Path plus encoded query string, relative to the API base URL.
    pub fn path_and_query(&self) -> String {
        let (path, pairs) = match self {
            Endpoint::List { resource, query } => (
                format!("/api/v1/{}", encode_component(resource)),
                query.pairs(),
            ),
            Endpoint::Post { kind, ident } => (
                format!("/api/v1/{}/{}", kind.resource(), encode_component(ident)),
                vec![("include_content", "true".to_string())],
            ),
            Endpoint::PostItem { kind, id } => {
                (format!("/api/v1/{}/{}", kind.resource(), id), Vec::new())
            }
            Endpoint::ReadNext { kind, ident } => (
                format!(
                    "/api/v1/{}/{}/read-next",
                    kind.segment(),
                    encode_component(ident)
                ),
                Vec::new(),
            ),
            Endpoint::Related { kind, ident } => (
                format!(
                    "/api/v1/{}/{}/related",
                    kind.segment(),
                    encode_component(ident)
                ),
                Vec::new(),
            ),
            Endpoint::MostRead(kind) => (
                format!("/api/v1/analytics/most-read/{}", kind.segment()),
                Vec::new(),
            ),
            Endpoint::Latest { kind, query } => (
                format!("/api/v1/analytics/latest-{}", kind.segment()),
                query.pairs(),
            ),
            Endpoint::NewsMain => (
                "/api/v1/news-main".to_string(),
                vec![
                    ("active", "1".to_string()),
                    ("include_content", "true".to_string()),
                ],
            ),
            Endpoint::AllPlaces { query } => {
                let raw = query
                    .as_deref()
                    .map(|q| q.trim_start_matches('?'))
                    .filter(|q| !q.is_empty());
                return match raw {
                    Some(q) => format!("/api/atl-places?{q}"),
                    None => "/api/atl-places".to_string(),
                };
            }
            Endpoint::SearchPlaces { q } => {
                ("/api/search/places".to_string(), vec![("q", q.clone())])
            }
        };

        if pairs.is_empty() {
            return path;
        }

        let query = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_list_path() {
        let endpoint = Endpoint::list("blog-posts", ListQuery::per_page(10));
        assert_eq!(endpoint.path_and_query(), "/api/v1/blog-posts?per_page=10");
    }

    #[test]
    fn test_latest_blog_page() {
        let endpoint = Endpoint::Latest {
            kind: PostKind::Blog,
            query: ListQuery::per_page(6).with_page(2).with_content(),
        };
        assert_eq!(
            endpoint.path_and_query(),
            "/api/v1/analytics/latest-blog?page=2&per_page=6&include_content=true"
        );
    }

    #[test]
    fn test_post_ident_is_encoded() {
        let endpoint = Endpoint::Post {
            kind: PostKind::News,
            ident: "a b/c".to_string(),
        };
        assert_eq!(
            endpoint.path_and_query(),
            "/api/v1/news-posts/a%20b%2Fc?include_content=true"
        );
    }

    #[test]
    fn test_post_item_has_no_query() {
        let endpoint = Endpoint::PostItem {
            kind: PostKind::Blog,
            id: 12,
        };
        assert_eq!(endpoint.path_and_query(), "/api/v1/blog-posts/12");
    }

    #[test]
    fn test_relations() {
        let read_next = Endpoint::ReadNext {
            kind: PostKind::Blog,
            ident: "42".to_string(),
        };
        let related = Endpoint::Related {
            kind: PostKind::News,
            ident: "7".to_string(),
        };
        assert_eq!(read_next.path_and_query(), "/api/v1/blog/42/read-next");
        assert_eq!(related.path_and_query(), "/api/v1/news/7/related");
        assert_eq!(
            Endpoint::MostRead(PostKind::News).path_and_query(),
            "/api/v1/analytics/most-read/news"
        );
    }

    #[test]
    fn test_places() {
        assert_eq!(
            Endpoint::AllPlaces { query: None }.path_and_query(),
            "/api/atl-places"
        );
        assert_eq!(
            Endpoint::AllPlaces {
                query: Some("?q=tacos&page=2".to_string())
            }
            .path_and_query(),
            "/api/atl-places?q=tacos&page=2"
        );
        assert_eq!(
            Endpoint::SearchPlaces {
                q: "ice cream".to_string()
            }
            .path_and_query(),
            "/api/search/places?q=ice%20cream"
        );
    }

    #[test]
    fn test_news_main() {
        assert_eq!(
            Endpoint::NewsMain.path_and_query(),
            "/api/v1/news-main?active=1&include_content=true"
        );
    }
}
