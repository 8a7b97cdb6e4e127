//! Search results list and map markers.

use std::sync::Arc;

use rand::Rng;

use super::{section_data, section_patches};
use crate::dom::selectors::{MAP, SEARCH_RESULTS};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::endpoint::Endpoint;
use crate::domain::entities::Place;
use crate::domain::place_search::search_places;
use crate::domain::repositories::{ContentRepository, fetch_list};
use crate::render::RenderContext;
use crate::render::places::{build_markers, render_search_results};

pub struct PlacesService<R: ContentRepository> {
    repository: Arc<R>,
    ctx: RenderContext,
    /// Places known locally, used when the API cannot answer.
    fallback: Arc<Vec<Place>>,
}

impl<R: ContentRepository> PlacesService<R> {
    pub fn new(repository: Arc<R>, ctx: RenderContext, fallback: Arc<Vec<Place>>) -> Self {
        Self {
            repository,
            ctx,
            fallback,
        }
    }

    /// Result list for the search page, carrying the page's own query
    /// string to the API. The list is emptied on failure.
    pub async fn search_results(&self, query: Option<String>) -> Hydration {
        let endpoint = Endpoint::AllPlaces { query };
        let html = match section_data(
            "search-results",
            fetch_list::<Place, _>(self.repository.as_ref(), &endpoint).await,
        ) {
            Some(list) => render_search_results(&list.items, &self.ctx).unwrap_or_else(|e| {
                tracing::error!("Rendering search results failed: {}", e);
                String::new()
            }),
            None => String::new(),
        };
        Hydration::from(vec![Patch::html(SEARCH_RESULTS, html)])
    }

    /// Map markers for every place, or for the places matching `q`.
    pub async fn map(&self, q: Option<&str>) -> Hydration {
        let places = self.map_places(q).await;
        self.markers(&places, &mut rand::rng())
    }

    /// Places to plot.
    ///
    /// Without a query all places are loaded, falling back to the local
    /// list. A failed search is answered by scoring the local list.
    pub async fn map_places(&self, q: Option<&str>) -> Vec<Place> {
        let repo = self.repository.as_ref();
        match q.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                let endpoint = Endpoint::SearchPlaces { q: q.to_string() };
                match section_data("map-search", fetch_list::<Place, _>(repo, &endpoint).await) {
                    Some(list) => list.items,
                    None => {
                        tracing::warn!("Searching {} local places for \"{}\"", self.fallback.len(), q);
                        search_places(q, &self.fallback)
                    }
                }
            }
            None => {
                let endpoint = Endpoint::AllPlaces { query: None };
                match section_data("map-places", fetch_list::<Place, _>(repo, &endpoint).await) {
                    Some(list) => list.items,
                    None => {
                        tracing::warn!("Falling back to {} local places", self.fallback.len());
                        self.fallback.as_ref().clone()
                    }
                }
            }
        }
    }

    /// Map binding with jittered markers and the bounds to fit.
    pub fn markers<G: Rng + ?Sized>(&self, places: &[Place], rng: &mut G) -> Hydration {
        section_patches(
            "map",
            build_markers(places, rng).map(|(markers, bounds)| {
                let mut hydration = Hydration::new();
                hydration.bind(Binding::Map {
                    root: MAP.to_string(),
                    markers,
                    bounds,
                });
                hydration
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContentRepository;
    use crate::error::FetchError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn down() -> FetchError {
        FetchError::Status {
            url: "http://api/x".to_string(),
            status: 503,
            body: String::new(),
        }
    }

    fn local() -> Arc<Vec<Place>> {
        let places: Vec<Place> = serde_json::from_value(json!([
            { "title": "Sweet Scoops", "categories": ["ice cream"], "lat": 33.7, "lng": -84.3 },
            { "title": "Bean There", "categories": ["coffee"], "lat": 33.8, "lng": -84.4 }
        ]))
        .unwrap();
        Arc::new(places)
    }

    fn service(repo: MockContentRepository) -> PlacesService<MockContentRepository> {
        PlacesService::new(Arc::new(repo), RenderContext::default(), local())
    }

    #[tokio::test]
    async fn test_search_results_carry_query() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| e.path_and_query() == "/api/atl-places?q=tacos")
            .times(1)
            .returning(|_| Ok(json!([{ "title": "Taco Spot" }, { "title": "Taco Two" }])));

        let h = service(repo).search_results(Some("?q=tacos".to_string())).await;
        let html = h.html_for(SEARCH_RESULTS).unwrap();
        assert_eq!(html.matches("class=\"search-item\"").count(), 2);
    }

    #[tokio::test]
    async fn test_search_results_emptied_on_failure() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json().times(1).returning(|_| Err(down()));

        let h = service(repo).search_results(None).await;
        assert_eq!(h.html_for(SEARCH_RESULTS), Some(""));
    }

    #[tokio::test]
    async fn test_map_falls_back_to_local_places() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| matches!(e, Endpoint::AllPlaces { query: None }))
            .times(1)
            .returning(|_| Err(down()));

        let svc = service(repo);
        let places = svc.map_places(None).await;
        assert_eq!(places.len(), 2);

        let h = svc.markers(&places, &mut StdRng::seed_from_u64(3));
        match &h.bindings[0] {
            Binding::Map { root, markers, bounds } => {
                assert_eq!(root, MAP);
                assert_eq!(markers.len(), 2);
                assert_eq!(markers[0].icon, "🍦");
                assert!(bounds.is_some());
            }
            other => panic!("unexpected binding {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_search_scores_local_places() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| e.path_and_query() == "/api/search/places?q=coffee")
            .times(1)
            .returning(|_| Err(down()));

        let places = service(repo).map_places(Some(" coffee ")).await;
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].display_name(), "Bean There");
    }

    #[tokio::test]
    async fn test_map_search_uses_api() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .times(1)
            .returning(|_| Ok(json!({ "places": [{ "title": "Remote", "lat": 1, "lng": 2 }] })));

        let h = service(repo).map(Some("remote")).await;
        assert!(matches!(&h.bindings[0], Binding::Map { markers, .. } if markers.len() == 1));
    }
}
