//! # Page Hydrator
//!
//! A fragment server that hydrates server-rendered blog, news, admin and
//! search-map pages from an upstream REST API. Built with Axum, askama and
//! reqwest.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - View-models, endpoints and the repository trait
//! - **Application Layer** ([`application`]) - Page services
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest repository, fallback places
//! - **Rendering** ([`render`]) - askama fragments and formatting
//! - **DOM model** ([`dom`]) - Patches and widget bindings sent to the page
//! - **Widgets** ([`widgets`]) - Carousel, pager, accordion, sidebar and nav state
//! - **Forms** ([`forms`]) - Post form validation, slugs and field errors
//! - **API Layer** ([`api`]) - Fragment handlers, DTOs and middleware
//!
//! ## Hydration
//!
//! A page asks one fragment endpoint for its [`dom::Hydration`]: ordered
//! patches addressed by CSS selector, followed by the interactions to wire.
//! Each page section is fetched and rendered on its own; a failed section is
//! logged and left untouched while the rest of the page renders.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="http://127.0.0.1:5000"
//! cargo run
//! curl http://localhost:3000/fragments/blog?page=2
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod dom;
pub mod domain;
pub mod error;
pub mod forms;
pub mod infrastructure;
pub mod render;
pub mod state;
pub mod utils;
pub mod widgets;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, FetchError, FormError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AdminService, ArticleService, HomeService, ListingService, PlacesService,
        PostFormService,
    };
    pub use crate::dom::{Binding, Hydration, Patch};
    pub use crate::domain::entities::{Place, Post, PostKind};
    pub use crate::error::{AppError, FetchError, FormError};
    pub use crate::infrastructure::http::HttpContentRepository;
    pub use crate::state::AppState;
}
