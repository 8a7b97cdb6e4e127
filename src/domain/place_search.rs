//! Local keyword search over known places.
//!
//! Used by the map when the upstream search endpoint fails: the query is
//! tokenized, expanded through a small synonym table and scored against each
//! place's title, tags, categories, address and slug.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::Place;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9']+").unwrap());

const SYNONYMS: &[(&str, &[&str])] = &[
    ("taco", &["taco", "tacos", "mexican"]),
    ("barber", &["barber", "barbershop", "fade", "hair"]),
    ("coffee", &["coffee", "cafe", "espresso"]),
    ("tea", &["tea", "teahouse"]),
    ("juice", &["juice", "smoothie"]),
    ("sake", &["sake", "bar"]),
    ("restaurant", &["restaurant", "food", "dining"]),
];

fn tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn joined_tokens<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(tokens)
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_terms(query: &str) -> BTreeSet<String> {
    let mut expanded = BTreeSet::new();
    for term in tokens(query) {
        match SYNONYMS.iter().find(|(key, _)| *key == term) {
            Some((_, words)) => expanded.extend(words.iter().map(|w| w.to_string())),
            None => {
                expanded.insert(term);
            }
        }
    }
    expanded
}

/// Relevance of a place for the expanded terms; zero means no match.
fn score(place: &Place, terms: &BTreeSet<String>) -> u32 {
    let title = joined_tokens([place.display_name()]);
    let tags = joined_tokens(place.tags.iter().map(String::as_str));
    let cats = joined_tokens(place.categories.iter().map(String::as_str));
    let addr = joined_tokens(place.address.as_deref());
    let slug = joined_tokens(place.slug.as_deref());

    terms
        .iter()
        .map(|t| {
            let t = t.as_str();
            let mut s = 0;
            if title.contains(t) {
                s += 3;
            }
            if tags.contains(t) {
                s += 2;
            }
            if cats.contains(t) {
                s += 2;
            }
            if addr.contains(t) {
                s += 1;
            }
            if slug.contains(t) {
                s += 1;
            }
            s
        })
        .sum()
}

/// Filters and ranks `places` for `query`.
///
/// Results are ordered by score, then review count, then rating, all
/// descending. A blank query matches nothing.
pub fn search_places(query: &str, places: &[Place]) -> Vec<Place> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let terms = expand_terms(query);
    let mut scored: Vec<(u32, &Place)> = places
        .iter()
        .map(|p| (score(p, &terms), p))
        .filter(|(s, _)| *s > 0)
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| {
        sb.cmp(sa)
            .then_with(|| b.review_total().cmp(&a.review_total()))
            .then_with(|| {
                b.rating_value()
                    .partial_cmp(&a.rating_value())
                    .unwrap_or(Ordering::Equal)
            })
    });

    scored.into_iter().map(|(_, p)| p.clone()).collect()
}
