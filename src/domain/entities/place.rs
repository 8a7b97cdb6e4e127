use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// A place shown in search results and on the map.
///
/// Place data is hand-curated upstream and loosely typed, so every field is
/// decoded leniently.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Place {
    #[serde(default, deserialize_with = "lenient::text")]
    pub atl_place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub review_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reviews: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_atl_verified: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub open_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub open_now_status: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub review_link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub img: Option<String>,
}

impl Place {
    /// `title`, then `name`, then empty.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// Latitude and longitude, when both parse.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lng?))
    }

    pub fn rating_value(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// `review_count`, falling back to `reviews`.
    pub fn review_total(&self) -> u64 {
        self.review_count
            .or(self.reviews)
            .filter(|n| *n > 0.0)
            .map(|n| n.floor() as u64)
            .unwrap_or(0)
    }

    pub fn is_verified(&self) -> bool {
        self.is_atl_verified || self.verified
    }

    /// Identifier used to build element ids for this place.
    ///
    /// `position` disambiguates places that carry neither a slug nor an id.
    pub fn anchor_slug(&self, position: usize) -> String {
        match (&self.slug, &self.atl_place_id) {
            (Some(slug), _) => slug.clone(),
            (None, Some(id)) => format!("place-{id}"),
            (None, None) => format!("place-{}", position + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_place() {
        let place: Place = serde_json::from_value(json!({
            "atl_place_id": 12,
            "name": "Cafe",
            "lat": " 33.75 ",
            "lng": "-84.39°",
            "categories": "coffee, bakery",
            "rating": "4.5",
            "reviews": 1200,
            "verified": 1,
            "open_now_status": "true"
        }))
        .unwrap();

        assert_eq!(place.display_name(), "Cafe");
        assert_eq!(place.coordinates(), Some((33.75, -84.39)));
        assert_eq!(place.categories, vec!["coffee", "bakery"]);
        assert_eq!(place.rating_value(), 4.5);
        assert_eq!(place.review_total(), 1200);
        assert!(place.is_verified());
        assert!(place.open_now_status);
        assert_eq!(place.anchor_slug(0), "place-12");
    }

    #[test]
    fn test_missing_coordinates() {
        let place: Place = serde_json::from_value(json!({ "lat": "n/a", "lng": 1.0 })).unwrap();
        assert_eq!(place.coordinates(), None);
        assert_eq!(place.review_total(), 0);
        assert_eq!(place.anchor_slug(2), "place-3");
    }

    #[test]
    fn test_title_wins_over_name() {
        let place: Place =
            serde_json::from_value(json!({ "title": "Title", "name": "Name" })).unwrap();
        assert_eq!(place.display_name(), "Title");
    }
}
