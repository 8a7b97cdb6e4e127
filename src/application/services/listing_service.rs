//! Blog list and news index pages.

use std::sync::Arc;

use super::{section_data, section_patches};
use crate::dom::selectors::{BLOG_LIST, BLOG_PAGER, NEWS_LATEST, NEWS_MOST_READ};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::endpoint::{Endpoint, ListQuery};
use crate::domain::entities::{NewsMainRow, Post, PostKind};
use crate::domain::repositories::{ContentRepository, fetch_list};
use crate::render::RenderContext;
use crate::render::article::render_main_story;
use crate::render::lists::{
    LATEST_NEWS_CAP, NO_BLOG_POSTS, NO_LATEST_NEWS, render_post_cards, render_ranked,
};
use crate::widgets::Pager;

/// Rows requested for the news index fallback list.
const NEWS_INDEX_PAGE_SIZE: u32 = 10;

pub struct ListingService<R: ContentRepository> {
    repository: Arc<R>,
    ctx: RenderContext,
    blog_page_size: u32,
}

impl<R: ContentRepository> ListingService<R> {
    pub fn new(repository: Arc<R>, ctx: RenderContext, blog_page_size: u32) -> Self {
        Self {
            repository,
            ctx,
            blog_page_size,
        }
    }

    /// One page of the latest blog posts plus the pager.
    ///
    /// A failed request leaves the list and pager untouched.
    pub async fn blog_list(&self, page: u32) -> Hydration {
        let page = page.max(1);
        let endpoint = Endpoint::Latest {
            kind: PostKind::Blog,
            query: ListQuery::per_page(self.blog_page_size)
                .with_page(page)
                .with_content(),
        };
        tracing::info!("Loading blog page {}", page);

        let Some(list) = section_data(
            "blog-list",
            fetch_list::<Post, _>(self.repository.as_ref(), &endpoint).await,
        ) else {
            return Hydration::new();
        };

        let mut hydration = section_patches(
            "blog-list",
            render_post_cards(&list.items, PostKind::Blog, None, NO_BLOG_POSTS, &self.ctx)
                .map(|html| Hydration::from(vec![Patch::html(BLOG_LIST, html)])),
        );

        let pager = Pager::new(self.blog_page_size).loaded(page, &list.meta);
        hydration.extend(pager.patches()).bind(Binding::Pager {
            root: BLOG_PAGER.to_string(),
            page: pager.page,
            pages: pager.pages,
            per_page: pager.per_page,
            prev: pager.prev().map(blog_page_url),
            next: pager.next().map(blog_page_url),
        });
        hydration
    }

    /// Most-read ranking, latest cards and the featured story.
    ///
    /// The featured story comes from the active news-main row and falls back
    /// to the first news post.
    pub async fn news_index(&self) -> Hydration {
        let repo = self.repository.as_ref();
        let posts_endpoint = Endpoint::list(
            PostKind::News.resource(),
            ListQuery::per_page(NEWS_INDEX_PAGE_SIZE).with_content(),
        );
        let latest_endpoint = Endpoint::Latest {
            kind: PostKind::News,
            query: ListQuery::per_page(LATEST_NEWS_CAP as u32).with_content(),
        };
        let most_read_endpoint = Endpoint::MostRead(PostKind::News);

        let (posts, main, most_read, latest) = tokio::join!(
            fetch_list::<Post, _>(repo, &posts_endpoint),
            fetch_list::<NewsMainRow, _>(repo, &Endpoint::NewsMain),
            fetch_list::<Post, _>(repo, &most_read_endpoint),
            fetch_list::<Post, _>(repo, &latest_endpoint),
        );

        let mut hydration = Hydration::new();

        if let Some(list) = section_data("news-most-read", most_read) {
            hydration.merge(section_patches(
                "news-most-read",
                render_ranked(&list.items, PostKind::News)
                    .map(|html| Hydration::from(vec![Patch::html(NEWS_MOST_READ, html)])),
            ));
        }

        if let Some(list) = section_data("news-latest", latest) {
            hydration.merge(section_patches(
                "news-latest",
                render_post_cards(
                    &list.items,
                    PostKind::News,
                    Some(LATEST_NEWS_CAP),
                    NO_LATEST_NEWS,
                    &self.ctx,
                )
                .map(|html| Hydration::from(vec![Patch::html(NEWS_LATEST, html)])),
            ));
        }

        let featured = section_data("news-main", main)
            .and_then(|list| list.items.into_iter().next())
            .and_then(|row| row.post);
        if featured.is_none() {
            tracing::warn!("No active main story, falling back to the first news post");
        }
        let fallback = section_data("news-posts", posts).and_then(|list| list.items.into_iter().next());

        if let Some(story) = featured.or(fallback) {
            hydration.extend(render_main_story(&story, &self.ctx));
        }
        hydration
    }
}

fn blog_page_url(page: u32) -> String {
    format!("/fragments/blog?page={page}")
}
