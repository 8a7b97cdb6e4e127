//! Search result list and map marker rendering.

use std::collections::HashMap;

use askama::Template;
use rand::Rng;

use super::RenderContext;
use super::assets::thumbnail;
use super::escape::escape_attr;
use super::format::title_case;
use crate::dom::{Bounds, Marker};
use crate::domain::entities::Place;
use crate::utils::numbers::group_thousands;

const STAR_PATH: &str = "M10 1.5l2.7 5.5 6.1.9-4.4 4.3 1 6.1L10 15.8 4.6 18.3l1-6.1L1.2 7.9l6.1-.9L10 1.5z";

/// Latitude spread applied to duplicated coordinates.
const JITTER_LAT: f64 = 0.00018;
/// Longitude spread applied to duplicated coordinates.
const JITTER_LNG: f64 = 0.00025;

struct SearchItemView {
    img: String,
    title: String,
    anchor: String,
    rating_label: String,
    stars_html: String,
    review_count: String,
    categories: String,
    verified: bool,
    open_status: String,
    open_status_attr: String,
    open_now: &'static str,
    review_link_attr: Option<String>,
}

#[derive(Template)]
#[template(path = "fragments/search_results.html")]
struct SearchResultsTemplate {
    items: Vec<SearchItemView>,
}

#[derive(Template)]
#[template(path = "fragments/map_popup.html")]
struct PopupTemplate<'a> {
    name: &'a str,
    verified: bool,
    address: Option<&'a str>,
    rating: String,
    reviews: String,
    status: Option<&'a str>,
}

/// Star icons for a rating: full stars, an optional half star, then empties.
///
/// The rating is clamped to `0..=5`; `clip_id` keeps the half star's clip
/// path unique on the page.
pub fn stars_html(rating: f64, clip_id: &str) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = usize::from(rating - rating.floor() >= 0.5);
    let empty = 5usize.saturating_sub(full + half);

    let mut out = String::new();
    for _ in 0..full {
        out.push_str(&format!(
            r#"<svg class="search-result-star full" viewBox="0 0 20 20" aria-hidden="true"><path d="{STAR_PATH}"/></svg>"#
        ));
    }
    if half == 1 {
        out.push_str(&format!(
            r##"<svg class="search-result-star half" viewBox="0 0 20 20" aria-hidden="true"><defs><clipPath id="half-clip-{clip_id}"><rect x="0" y="0" width="10" height="20"></rect></clipPath></defs><path class="star-empty" d="{STAR_PATH}" fill="#e0e0e0"/><path class="star-fill" d="{STAR_PATH}" fill="#ffb400" clip-path="url(#half-clip-{clip_id})"/></svg>"##
        ));
    }
    for _ in 0..empty {
        out.push_str(&format!(
            r#"<svg class="search-result-star empty" viewBox="0 0 20 20" aria-hidden="true"><path d="{STAR_PATH}"/></svg>"#
        ));
    }
    out
}

/// Renders one `li.search-item` per place.
pub fn render_search_results(places: &[Place], ctx: &RenderContext) -> askama::Result<String> {
    let items = places
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let rating = p.rating_value().clamp(0.0, 5.0);
            let anchor = escape_attr(&p.anchor_slug(i));
            let clip_id = p
                .atl_place_id
                .as_deref()
                .map(escape_attr)
                .unwrap_or_else(|| anchor.clone());
            let open_status = p.open_status.clone().unwrap_or_default();

            SearchItemView {
                img: thumbnail(p.img.as_deref(), &ctx.static_base),
                title: p.display_name().to_string(),
                rating_label: format!("{rating:.1}"),
                stars_html: stars_html(rating, &clip_id),
                review_count: group_thousands(p.review_total()),
                categories: p
                    .categories
                    .iter()
                    .map(|c| title_case(c.trim()))
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
                    .join(" • "),
                verified: p.is_verified(),
                open_status_attr: escape_attr(&open_status),
                open_status,
                open_now: if p.open_now_status { "True" } else { "False" },
                review_link_attr: p.review_link.as_deref().map(escape_attr),
                anchor,
            }
        })
        .collect();

    SearchResultsTemplate { items }.render()
}

/// Emoji pin for a place, by the first matching category keyword.
pub fn icon_for(categories: &[String]) -> &'static str {
    let cats: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();
    let any = |needle: &str| cats.iter().any(|c| c.contains(needle));

    if any("barber") {
        "💈"
    } else if any("coffee") {
        "☕"
    } else if any("tea") {
        "🫖"
    } else if any("sake") {
        "🍶"
    } else if any("ice cream") {
        "🍦"
    } else if any("juice") {
        "🧃"
    } else if any("healthy") || any("salad") {
        "🥗"
    } else {
        "📍"
    }
}

/// Map markers for every place with valid coordinates, plus their bounds.
///
/// Places sharing coordinates (to six decimals) are nudged apart at random
/// so their pins stay clickable; the first occurrence keeps its position.
pub fn build_markers<R: Rng + ?Sized>(
    places: &[Place],
    rng: &mut R,
) -> askama::Result<(Vec<Marker>, Option<Bounds>)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut markers = Vec::new();

    for place in places {
        let Some((lat, lng)) = place.coordinates() else {
            continue;
        };

        let key = format!("{lat:.6},{lng:.6}");
        let count = seen.entry(key).or_insert(0);
        *count += 1;
        let (lat, lng) = if *count > 1 {
            (
                lat + (rng.random::<f64>() - 0.5) * JITTER_LAT,
                lng + (rng.random::<f64>() - 0.5) * JITTER_LNG,
            )
        } else {
            (lat, lng)
        };

        let popup_html = PopupTemplate {
            name: place.display_name(),
            verified: place.is_verified(),
            address: place.address.as_deref(),
            rating: place.rating.map(|r| r.to_string()).unwrap_or_default(),
            reviews: group_thousands(place.review_total()),
            status: place.open_status.as_deref(),
        }
        .render()?;

        markers.push(Marker {
            lat,
            lng,
            icon: icon_for(&place.categories).to_string(),
            popup_html,
        });
    }

    let bounds = Bounds::enclosing(markers.iter().map(|m| (m.lat, m.lng)));
    Ok((markers, bounds))
}
