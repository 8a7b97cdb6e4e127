//! Read-next carousel fragments.

use askama::Template;

use super::RenderContext;
use super::lists::LinkCard;
use crate::domain::entities::{Post, PostKind};

#[derive(Template)]
#[template(path = "fragments/carousel_track.html")]
struct TrackTemplate {
    items: Vec<LinkCard>,
}

#[derive(Template)]
#[template(path = "fragments/carousel_dots.html")]
struct DotsTemplate {
    count: usize,
}

/// Track and dot markup of a carousel.
pub struct CarouselMarkup {
    pub track: String,
    pub dots: String,
    pub len: usize,
}

/// Renders one track item and one dot per post; the first dot starts active.
pub fn render_carousel(posts: &[Post], kind: PostKind, ctx: &RenderContext) -> askama::Result<CarouselMarkup> {
    let items: Vec<LinkCard> = posts
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let title = p.title.clone().unwrap_or_else(|| format!("Post {}", i + 1));
            LinkCard::from_post(p, kind, title, "", ctx)
        })
        .collect();
    let len = items.len();

    Ok(CarouselMarkup {
        track: TrackTemplate { items }.render()?,
        dots: DotsTemplate { count: len }.render()?,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_one_dot_per_item_first_active() {
        let posts: Vec<Post> = (0..3)
            .map(|i| Post {
                slug: Some(format!("p{i}")),
                ..Default::default()
            })
            .collect();
        let markup = render_carousel(&posts, PostKind::Blog, &RenderContext::default()).unwrap();

        let track = Html::parse_fragment(&markup.track);
        let dots = Html::parse_fragment(&markup.dots);
        let item = Selector::parse(".carousel-item").unwrap();
        let dot = Selector::parse("span.dot").unwrap();
        let active = Selector::parse("span.dot.active").unwrap();

        assert_eq!(markup.len, 3);
        assert_eq!(track.select(&item).count(), 3);
        assert_eq!(dots.select(&dot).count(), 3);
        let first_active: Vec<&str> = dots
            .select(&active)
            .filter_map(|d| d.value().attr("data-index"))
            .collect();
        assert_eq!(first_active, vec!["0"]);
        assert!(markup.track.contains("Post 2"));
    }

    #[test]
    fn test_empty_carousel() {
        let markup = render_carousel(&[], PostKind::News, &RenderContext::default()).unwrap();
        assert_eq!(markup.len, 0);
        assert!(markup.track.trim().is_empty());
        assert!(markup.dots.trim().is_empty());
    }
}
