//! Post list fragments: most-read grid, related list, cards and rankings.

use askama::Template;

use super::RenderContext;
use super::assets::{MOST_READ_DEFAULT_IMAGE, post_image};
use super::format::{SNIPPET_CHARS, truncate};
use crate::domain::entities::{Post, PostKind};

/// Rows shown in the most-read lists.
pub const MOST_READ_CAP: usize = 7;
/// Rows shown in the related list.
pub const RELATED_CAP: usize = 4;
/// Cards shown in the latest-news list.
pub const LATEST_NEWS_CAP: usize = 3;

pub const NO_BLOG_POSTS: &str = "No blog posts found.";
pub const NO_LATEST_NEWS: &str = "No latest news available.";

/// Linked thumbnail shared by the grid, related and carousel fragments.
pub struct LinkCard {
    pub href: String,
    pub img: String,
    pub title: String,
}

impl LinkCard {
    pub fn from_post(post: &Post, kind: PostKind, title: String, default_image: &str, ctx: &RenderContext) -> Self {
        Self {
            href: post.href(kind),
            img: post_image(post, &ctx.static_base, default_image),
            title,
        }
    }
}

pub struct PostCard {
    pub href: String,
    pub img: String,
    pub title: String,
    pub snippet: String,
}

#[derive(Template)]
#[template(path = "fragments/most_read_grid.html")]
struct MostReadGridTemplate {
    items: Vec<LinkCard>,
}

#[derive(Template)]
#[template(path = "fragments/related_list.html")]
struct RelatedListTemplate {
    items: Vec<LinkCard>,
}

#[derive(Template)]
#[template(path = "fragments/post_cards.html")]
struct PostCardsTemplate<'a> {
    cards: Vec<PostCard>,
    empty_message: &'a str,
}

struct RankedItem {
    href: String,
    title: String,
}

#[derive(Template)]
#[template(path = "fragments/ranked_list.html")]
struct RankedListTemplate {
    items: Vec<RankedItem>,
}

/// Most-read thumbnail grid, capped at [`MOST_READ_CAP`].
pub fn render_most_read_grid(posts: &[Post], kind: PostKind, ctx: &RenderContext) -> askama::Result<String> {
    let items = posts
        .iter()
        .take(MOST_READ_CAP)
        .enumerate()
        .map(|(i, p)| {
            let title = p.title.clone().unwrap_or_else(|| format!("Post {}", i + 1));
            LinkCard::from_post(p, kind, title, MOST_READ_DEFAULT_IMAGE, ctx)
        })
        .collect();
    MostReadGridTemplate { items }.render()
}

/// Related articles, capped at [`RELATED_CAP`].
pub fn render_related(posts: &[Post], kind: PostKind, ctx: &RenderContext) -> askama::Result<String> {
    let items = posts
        .iter()
        .take(RELATED_CAP)
        .map(|p| LinkCard::from_post(p, kind, p.title_or("Untitled").to_string(), "", ctx))
        .collect();
    RelatedListTemplate { items }.render()
}

/// Snippet cards with a `Read More` link; `empty_message` when there are none.
pub fn render_post_cards(
    posts: &[Post],
    kind: PostKind,
    cap: Option<usize>,
    empty_message: &str,
    ctx: &RenderContext,
) -> askama::Result<String> {
    let cards = posts
        .iter()
        .take(cap.unwrap_or(usize::MAX))
        .map(|p| PostCard {
            href: p.href(kind),
            img: post_image(p, &ctx.static_base, ""),
            title: p.title_or("Untitled").to_string(),
            snippet: truncate(p.snippet().unwrap_or(""), SNIPPET_CHARS),
        })
        .collect();
    PostCardsTemplate {
        cards,
        empty_message,
    }
    .render()
}

/// Numbered most-read list of the news index, capped at [`MOST_READ_CAP`].
pub fn render_ranked(posts: &[Post], kind: PostKind) -> askama::Result<String> {
    let items = posts
        .iter()
        .take(MOST_READ_CAP)
        .map(|p| RankedItem {
            href: p.href(kind),
            title: p.title_or("Untitled").to_string(),
        })
        .collect();
    RankedListTemplate { items }.render()
}
