//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AdminService, ArticleService, HomeService, ListingService, PlacesService, PostFormService,
};
use crate::config::Config;
use crate::domain::entities::Place;
use crate::infrastructure::http::HttpContentRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<HttpContentRepository>,
    pub article_service: Arc<ArticleService<HttpContentRepository>>,
    pub listing_service: Arc<ListingService<HttpContentRepository>>,
    pub admin_service: Arc<AdminService<HttpContentRepository>>,
    pub places_service: Arc<PlacesService<HttpContentRepository>>,
    pub post_form_service: Arc<PostFormService<HttpContentRepository>>,
    pub home_service: Arc<HomeService>,
    /// Number of locally known places, reported by the health check.
    pub fallback_places: usize,
}

impl AppState {
    /// Wires every page service onto one upstream repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the display offset is out of range.
    pub fn new(
        config: &Config,
        repository: Arc<HttpContentRepository>,
        fallback: Vec<Place>,
    ) -> anyhow::Result<Self> {
        let ctx = config.render_context()?;
        let fallback_places = fallback.len();
        let fallback = Arc::new(fallback);

        Ok(Self {
            article_service: Arc::new(ArticleService::new(
                repository.clone(),
                ctx.clone(),
                config.carousel_interval(),
            )),
            listing_service: Arc::new(ListingService::new(
                repository.clone(),
                ctx.clone(),
                config.blog_page_size,
            )),
            admin_service: Arc::new(AdminService::new(repository.clone(), ctx.clone())),
            places_service: Arc::new(PlacesService::new(repository.clone(), ctx.clone(), fallback)),
            post_form_service: Arc::new(PostFormService::new(repository.clone())),
            home_service: Arc::new(HomeService::new(ctx)),
            repository,
            fallback_places,
        })
    }
}
