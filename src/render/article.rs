//! Main article patches for blog and news detail pages.

use super::RenderContext;
use super::assets::post_image;
use super::format::{SNIPPET_CHARS, detail_date, truncate};
use super::sections::{render_assoc_press, render_faqs, render_section, render_watch_now};
use crate::dom::selectors::{
    ARTICLE_CATEGORY, ARTICLE_DATE, ARTICLE_IMAGE, ARTICLE_META, ARTICLE_TITLE, ASSOC_PRESS,
    BODY_SECTIONS, COMMENT_COUNT, FAQS, MAIN_DESC, MAIN_LINK, MAIN_STORY_IMAGE, MAIN_TITLE,
    WATCH_NOW, WATCH_NOW_VIDEO,
};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::entities::{Content, Post, PostKind};

/// Text shown when a post field is missing, per page kind.
struct Fallbacks {
    category: &'static str,
    author: Option<&'static str>,
    date: &'static str,
}

fn fallbacks(kind: PostKind) -> Fallbacks {
    match kind {
        PostKind::Blog => Fallbacks {
            category: "",
            author: None,
            date: "",
        },
        PostKind::News => Fallbacks {
            category: "Untitled",
            author: Some("Unknown"),
            date: "Unknown",
        },
    }
}

/// Patches filling the article header, body sections, FAQs, video and
/// comment counter.
pub fn render_article(post: &Post, kind: PostKind, ctx: &RenderContext) -> askama::Result<Hydration> {
    let fb = fallbacks(kind);
    let mut hydration = Hydration::new();

    hydration
        .push(Patch::attr(ARTICLE_IMAGE, "src", post_image(post, &ctx.static_base, "")))
        .push(Patch::attr(ARTICLE_IMAGE, "alt", post.title_or("Story image")))
        .push(Patch::text(
            ARTICLE_CATEGORY,
            post.category_title.as_deref().unwrap_or(fb.category),
        ))
        .push(Patch::text(ARTICLE_TITLE, post.title_or("Untitled")));

    let author = post.author_first_name.as_deref().or(fb.author);
    hydration.push(Patch::text(
        ARTICLE_META,
        author.map(|a| format!("By {a}")).unwrap_or_default(),
    ));

    let date = post
        .created_at
        .as_deref()
        .and_then(|raw| detail_date(raw, ctx.display_offset))
        .unwrap_or_else(|| fb.date.to_string());
    hydration.push(Patch::text(ARTICLE_DATE, date));

    let empty = Content::default();
    let content = post.content.as_ref().unwrap_or(&empty);

    match render_watch_now(content)? {
        Some(iframe) => hydration.push(Patch::html(WATCH_NOW_VIDEO, iframe)),
        None => hydration
            .push(Patch::html(WATCH_NOW_VIDEO, ""))
            .push(Patch::hide(WATCH_NOW)),
    };

    for (selector, key) in BODY_SECTIONS {
        hydration.push(Patch::html(selector, render_section(content, key)?));
    }
    hydration.push(Patch::html(ASSOC_PRESS, render_assoc_press(content)?));

    let faqs = render_faqs(content, post.title.as_deref())?;
    let has_faqs = !faqs.is_empty();
    hydration.push(Patch::html(FAQS, faqs));
    if has_faqs {
        hydration.bind(Binding::FaqAccordion {
            root: FAQS.to_string(),
        });
    }

    hydration.push(Patch::text(
        COMMENT_COUNT,
        format!("({} comments)", post.comment_count()),
    ));

    Ok(hydration)
}

/// Featured story card of the news index.
pub fn render_main_story(post: &Post, ctx: &RenderContext) -> Vec<Patch> {
    vec![
        Patch::attr(MAIN_STORY_IMAGE, "src", post_image(post, &ctx.static_base, "")),
        Patch::attr(MAIN_STORY_IMAGE, "alt", post.title_or("Main story image")),
        Patch::text(MAIN_TITLE, post.title_or("Untitled")),
        Patch::text(MAIN_DESC, truncate(post.snippet().unwrap_or(""), SNIPPET_CHARS)),
        Patch::attr(MAIN_LINK, "href", post.href(PostKind::News)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(value: serde_json::Value) -> Post {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_blog_article() {
        let p = post(json!({
            "post_id": 3,
            "slug": "s",
            "title": "Hello",
            "category_title": "Food",
            "author_first_name": "Ana",
            "image": "uploads/a.png",
            "created_at": "2025-10-05T15:04:00",
            "analytics": { "comments": 12 },
            "content": {
                "section_1_title": "One",
                "section_1_paragraph_1": "Para",
                "faq_q_1": "Why?",
                "faq_a_1": "Because.",
                "yt_vid_id": "dQw4w9WgXcQ"
            }
        }));
        let h = render_article(&p, PostKind::Blog, &RenderContext::default()).unwrap();

        assert_eq!(h.attr_for(ARTICLE_IMAGE, "src"), Some("/static/uploads/a.png"));
        assert_eq!(h.text_for(ARTICLE_CATEGORY), Some("Food"));
        assert_eq!(h.text_for(ARTICLE_META), Some("By Ana"));
        assert_eq!(h.text_for(ARTICLE_DATE), Some("October 05, 2025 at 03:04 PM"));
        assert_eq!(h.text_for(COMMENT_COUNT), Some("(12 comments)"));
        assert!(h.html_for(".section-1-article-deats").unwrap().contains("Para"));
        assert_eq!(h.html_for(".section-2-article-deats"), Some(""));
        assert!(h.html_for(WATCH_NOW_VIDEO).unwrap().contains("embed/dQw4w9WgXcQ"));
        assert!(h.bindings.contains(&Binding::FaqAccordion {
            root: FAQS.to_string()
        }));
    }

    #[test]
    fn test_blog_fallbacks() {
        let h = render_article(&Post::default(), PostKind::Blog, &RenderContext::default()).unwrap();
        assert_eq!(h.text_for(ARTICLE_TITLE), Some("Untitled"));
        assert_eq!(h.text_for(ARTICLE_CATEGORY), Some(""));
        assert_eq!(h.text_for(ARTICLE_META), Some(""));
        assert_eq!(h.text_for(ARTICLE_DATE), Some(""));
        assert_eq!(h.attr_for(ARTICLE_IMAGE, "alt"), Some("Story image"));
        assert_eq!(h.text_for(COMMENT_COUNT), Some("(0 comments)"));
        assert!(h.bindings.is_empty());
    }

    #[test]
    fn test_news_fallbacks() {
        let h = render_article(&Post::default(), PostKind::News, &RenderContext::default()).unwrap();
        assert_eq!(h.text_for(ARTICLE_CATEGORY), Some("Untitled"));
        assert_eq!(h.text_for(ARTICLE_META), Some("By Unknown"));
        assert_eq!(h.text_for(ARTICLE_DATE), Some("Unknown"));
    }

    #[test]
    fn test_invalid_video_hides_section() {
        let p = post(json!({ "content": { "yt_vid_id": "<bad>" } }));
        let h = render_article(&p, PostKind::News, &RenderContext::default()).unwrap();
        assert_eq!(h.html_for(WATCH_NOW_VIDEO), Some(""));
        assert!(h.patches.contains(&Patch::hide(WATCH_NOW)));
    }

    #[test]
    fn test_main_story() {
        let long = "word ".repeat(40);
        let p = post(json!({
            "post_id": 9,
            "slug": "big-news",
            "title": "Big News",
            "image_url": "https://cdn.example.com/a.jpg",
            "content": { "section_1_paragraph_1": long }
        }));
        let h = Hydration::from(render_main_story(&p, &RenderContext::default()));
        assert_eq!(h.attr_for(MAIN_STORY_IMAGE, "src"), Some("https://cdn.example.com/a.jpg"));
        assert_eq!(h.attr_for(MAIN_LINK, "href"), Some("/news/big-news"));
        let desc = h.text_for(MAIN_DESC).unwrap();
        assert!(desc.ends_with('…'));
        assert_eq!(desc.chars().count(), SNIPPET_CHARS + 1);
    }
}
