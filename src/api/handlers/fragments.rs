//! Handlers returning page hydrations.
//!
//! Every handler answers with a JSON [`Hydration`]: the patches to apply to
//! the server-rendered page plus the widgets to wire. Section failures are
//! absorbed by the page services, so most handlers cannot fail.

use axum::{
    Json,
    extract::{Path, Query, RawQuery, State},
};

use crate::api::dto::home::HomeRequest;
use crate::api::dto::query::{AdminListParams, MapParams, PageParams};
use crate::dom::Hydration;
use crate::error::AppError;
use crate::state::AppState;
use crate::widgets::interaction::{self, Interaction, InteractionOutcome};

/// `GET /fragments/blog?page=`
pub async fn blog_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<Hydration> {
    Json(state.listing_service.blog_list(params.page()).await)
}

/// `GET /fragments/blog/{slug}`
///
/// # Errors
///
/// Returns 404 when the post does not exist and 502 when the API fails.
pub async fn blog_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Hydration>, AppError> {
    Ok(Json(state.article_service.blog_detail(&slug).await?))
}

/// `GET /fragments/news`
pub async fn news_index_handler(State(state): State<AppState>) -> Json<Hydration> {
    Json(state.listing_service.news_index().await)
}

/// `GET /fragments/news/{ident}`
///
/// The related sections are returned even when the article itself fails.
pub async fn news_detail_handler(
    State(state): State<AppState>,
    Path(ident): Path<String>,
) -> Result<Json<Hydration>, AppError> {
    Ok(Json(state.article_service.news_detail(&ident).await?))
}

/// `GET /fragments/admin/{resource}?per_page=&include_content=&csrf_token=`
pub async fn admin_list_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<AdminListParams>,
) -> Json<Hydration> {
    Json(
        state
            .admin_service
            .list(
                &resource,
                params.per_page,
                params.include_content,
                params.csrf_token,
            )
            .await,
    )
}

/// `GET /fragments/search?<page query>`
///
/// The raw query string is forwarded to the places endpoint untouched.
pub async fn search_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<Hydration> {
    Json(state.places_service.search_results(query).await)
}

/// `GET /fragments/map?q=`
pub async fn map_handler(
    State(state): State<AppState>,
    Query(params): Query<MapParams>,
) -> Json<Hydration> {
    Json(state.places_service.map(params.q.as_deref()).await)
}

/// `POST /fragments/home`
pub async fn home_handler(
    State(state): State<AppState>,
    Json(payload): Json<HomeRequest>,
) -> Json<Hydration> {
    Json(
        state
            .home_service
            .render(&payload.news, payload.weather.as_ref()),
    )
}

/// `POST /fragments/interactions`
///
/// Runs one widget transition for a page that reports its events instead
/// of running the state machines itself.
pub async fn interaction_handler(Json(payload): Json<Interaction>) -> Json<InteractionOutcome> {
    Json(interaction::apply(payload))
}
