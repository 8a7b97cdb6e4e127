//! Fragment and form route configuration.

use crate::api::handlers::{
    admin_list_handler, blog_detail_handler, blog_list_handler, create_post_handler,
    form_wiring_handler, home_handler, image_preview_handler, interaction_handler, map_handler,
    news_detail_handler, news_index_handler, search_handler, update_post_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Hydration endpoints, one per page.
///
/// # Endpoints
///
/// - `GET  /blog`               - Latest blog posts page plus pager
/// - `GET  /blog/{slug}`        - Blog article with related sections
/// - `GET  /news`               - News index
/// - `GET  /news/{ident}`       - News article with related sections
/// - `GET  /admin/{resource}`   - Admin table of a resource
/// - `GET  /search`             - Search result list
/// - `GET  /map`                - Search map markers
/// - `POST /home`               - Home page news and weather cards
/// - `POST /interactions`       - One widget transition
pub fn fragment_routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(blog_list_handler))
        .route("/blog/{slug}", get(blog_detail_handler))
        .route("/news", get(news_index_handler))
        .route("/news/{ident}", get(news_detail_handler))
        .route("/admin/{resource}", get(admin_list_handler))
        .route("/search", get(search_handler))
        .route("/map", get(map_handler))
        .route("/home", post(home_handler))
        .route("/interactions", post(interaction_handler))
}

/// Post form endpoints.
///
/// # Endpoints
///
/// - `GET  /blog-posts`          - Form wiring (slug auto-fill, image preview)
/// - `POST /blog-posts`          - Create a post (multipart)
/// - `PUT  /blog-posts/{id}`     - Update a post (multipart, image optional)
/// - `POST /blog-posts/preview`  - Preview patches for a chosen image
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/blog-posts",
            get(form_wiring_handler).post(create_post_handler),
        )
        .route("/blog-posts/{id}", put(update_post_handler))
        .route("/blog-posts/preview", post(image_preview_handler))
}
