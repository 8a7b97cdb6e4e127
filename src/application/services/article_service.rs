//! Blog and news detail pages.

use std::sync::Arc;
use std::time::Duration;

use super::{section_data, section_patches};
use crate::dom::selectors::{
    MOST_READ_GRID, READ_NEXT_DOTS, READ_NEXT_TRACK, READ_NEXT_WRAPPER, RELATED_LIST,
};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::endpoint::Endpoint;
use crate::domain::entities::{ListPage, Post, PostKind};
use crate::domain::repositories::{ContentRepository, fetch_list, fetch_one};
use crate::error::{AppError, FetchError};
use crate::render::RenderContext;
use crate::render::article::render_article;
use crate::render::carousel::render_carousel;
use crate::render::lists::{render_most_read_grid, render_related};
use crate::widgets::Carousel;

type PostList = Result<ListPage<Post>, FetchError>;

/// Hydrates article pages: the main article plus most-read, read-next and
/// related sections.
pub struct ArticleService<R: ContentRepository> {
    repository: Arc<R>,
    ctx: RenderContext,
    carousel_interval: Duration,
}

impl<R: ContentRepository> ArticleService<R> {
    pub fn new(repository: Arc<R>, ctx: RenderContext, carousel_interval: Duration) -> Self {
        Self {
            repository,
            ctx,
            carousel_interval,
        }
    }

    /// Blog detail by slug.
    ///
    /// The post is fetched first; its numeric id then drives the read-next
    /// and related requests, which run alongside most-read.
    ///
    /// # Errors
    ///
    /// Fails only when the post itself cannot be fetched or rendered.
    pub async fn blog_detail(&self, slug: &str) -> Result<Hydration, AppError> {
        let kind = PostKind::Blog;
        let post: Post = fetch_one(
            self.repository.as_ref(),
            &Endpoint::Post {
                kind,
                ident: slug.to_string(),
            },
        )
        .await
        .inspect_err(|e| tracing::error!(slug, "Blog post fetch failed: {}", e))?;

        let mut hydration = render_article(&post, kind, &self.ctx)?;

        let ident = post.post_id.map(|id| id.to_string());
        let (most_read, read_next, related) = tokio::join!(
            self.most_read(kind),
            self.optional(ident.as_deref(), |ident| Endpoint::ReadNext { kind, ident }),
            self.optional(ident.as_deref(), |ident| Endpoint::Related { kind, ident }),
        );

        hydration.merge(self.related_sections(kind, most_read, read_next, related));
        Ok(hydration)
    }

    /// News detail by slug or id.
    ///
    /// All four requests run at once with the path identifier. A failed post
    /// request leaves the article untouched but still fills the other
    /// sections.
    pub async fn news_detail(&self, ident: &str) -> Result<Hydration, AppError> {
        let kind = PostKind::News;
        let repo = self.repository.as_ref();

        let post_endpoint = Endpoint::Post {
            kind,
            ident: ident.to_string(),
        };
        let (post, read_next, most_read, related) = tokio::join!(
            fetch_one::<Post, _>(repo, &post_endpoint),
            self.optional(Some(ident), |ident| Endpoint::ReadNext { kind, ident }),
            self.most_read(kind),
            self.optional(Some(ident), |ident| Endpoint::Related { kind, ident }),
        );

        let mut hydration = Hydration::new();
        if let Some(post) = section_data("news-post", post) {
            hydration.merge(render_article(&post, kind, &self.ctx)?);
        }
        hydration.merge(self.related_sections(kind, most_read, read_next, related));
        Ok(hydration)
    }

    async fn most_read(&self, kind: PostKind) -> PostList {
        fetch_list(self.repository.as_ref(), &Endpoint::MostRead(kind)).await
    }

    async fn optional(
        &self,
        ident: Option<&str>,
        endpoint: impl FnOnce(String) -> Endpoint,
    ) -> Option<PostList> {
        let ident = ident?;
        let endpoint = endpoint(ident.to_string());
        Some(fetch_list(self.repository.as_ref(), &endpoint).await)
    }

    fn related_sections(
        &self,
        kind: PostKind,
        most_read: PostList,
        read_next: Option<PostList>,
        related: Option<PostList>,
    ) -> Hydration {
        let mut hydration = Hydration::new();

        if let Some(page) = section_data("most-read", most_read) {
            hydration.merge(section_patches(
                "most-read",
                render_most_read_grid(&page.items, kind, &self.ctx)
                    .map(|html| Hydration::from(vec![Patch::html(MOST_READ_GRID, html)])),
            ));
        }

        if let Some(page) = read_next.and_then(|r| section_data("read-next", r)) {
            hydration.merge(section_patches("read-next", self.read_next(&page.items, kind)));
        }

        if let Some(page) = related.and_then(|r| section_data("related", r)) {
            hydration.merge(section_patches(
                "related",
                render_related(&page.items, kind, &self.ctx)
                    .map(|html| Hydration::from(vec![Patch::html(RELATED_LIST, html)])),
            ));
        }

        hydration
    }

    fn read_next(&self, posts: &[Post], kind: PostKind) -> askama::Result<Hydration> {
        let markup = render_carousel(posts, kind, &self.ctx)?;
        let carousel = Carousel::new(READ_NEXT_TRACK, READ_NEXT_DOTS, markup.len);

        let mut hydration = Hydration::new();
        hydration
            .push(Patch::html(READ_NEXT_TRACK, markup.track))
            .push(Patch::html(READ_NEXT_DOTS, markup.dots))
            .extend(carousel.patches())
            .bind(Binding::Carousel {
                root: READ_NEXT_WRAPPER.to_string(),
                items: markup.len,
                interval_ms: self.carousel_interval.as_millis() as u64,
            });
        Ok(hydration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selectors::ARTICLE_TITLE;
    use crate::domain::repositories::MockContentRepository;
    use crate::widgets::carousel::DEFAULT_INTERVAL;
    use serde_json::json;

    fn service(repo: MockContentRepository) -> ArticleService<MockContentRepository> {
        ArticleService::new(Arc::new(repo), RenderContext::default(), DEFAULT_INTERVAL)
    }

    fn status(code: u16) -> FetchError {
        FetchError::Status {
            url: "http://api/x".to_string(),
            status: code,
            body: "boom".to_string(),
        }
    }

    #[tokio::test]
    async fn test_blog_detail_renders_every_section() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json().returning(|endpoint| {
            Ok(match endpoint.path_and_query().as_str() {
                "/api/v1/blog-posts/hello?include_content=true" => {
                    json!({ "post_id": 42, "slug": "hello", "title": "Hello" })
                }
                "/api/v1/analytics/most-read/blog" => json!({ "items": [{ "title": "Popular" }] }),
                "/api/v1/blog/42/read-next" => {
                    json!({ "items": [{ "slug": "a" }, { "slug": "b" }], "count": 2 })
                }
                "/api/v1/blog/42/related" => json!({ "items": [] }),
                other => panic!("unexpected request {other}"),
            })
        });

        let h = service(repo).blog_detail("hello").await.unwrap();

        assert_eq!(h.text_for(ARTICLE_TITLE), Some("Hello"));
        assert!(h.html_for(MOST_READ_GRID).unwrap().contains("Popular"));
        assert!(h.html_for(READ_NEXT_TRACK).unwrap().contains("/blog/b"));
        assert!(h.html_for(RELATED_LIST).unwrap().contains("No related articles."));
        assert!(h.bindings.contains(&Binding::Carousel {
            root: READ_NEXT_WRAPPER.to_string(),
            items: 2,
            interval_ms: 5000,
        }));
    }

    #[tokio::test]
    async fn test_blog_detail_without_id_skips_relations() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| matches!(e, Endpoint::Post { .. }))
            .times(1)
            .returning(|_| Ok(json!({ "slug": "no-id", "title": "No id" })));
        repo.expect_get_json()
            .withf(|e| matches!(e, Endpoint::MostRead(PostKind::Blog)))
            .times(1)
            .returning(|_| Err(status(500)));

        let h = service(repo).blog_detail("no-id").await.unwrap();

        assert_eq!(h.text_for(ARTICLE_TITLE), Some("No id"));
        assert!(h.html_for(MOST_READ_GRID).is_none());
        assert!(h.html_for(READ_NEXT_TRACK).is_none());
    }

    #[tokio::test]
    async fn test_blog_detail_missing_post_fails() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .times(1)
            .returning(|_| Err(status(404)));

        let result = service(repo).blog_detail("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_news_detail_survives_post_failure() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json().times(4).returning(|endpoint| {
            match endpoint {
                Endpoint::Post { .. } => Err(status(500)),
                Endpoint::ReadNext { ident, .. } => {
                    assert_eq!(ident, "big-story");
                    Ok(json!({ "items": [{ "slug": "next" }] }))
                }
                Endpoint::Related { .. } => Err(status(502)),
                _ => Ok(json!({ "items": [] })),
            }
        });

        let h = service(repo).news_detail("big-story").await.unwrap();

        assert!(h.text_for(ARTICLE_TITLE).is_none());
        assert!(h.html_for(READ_NEXT_TRACK).unwrap().contains("/news/next"));
        assert!(h.html_for(MOST_READ_GRID).unwrap().contains("No data yet."));
        assert!(h.html_for(RELATED_LIST).is_none());
    }
}
