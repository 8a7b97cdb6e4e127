//! Application layer: one service per hydrated page.
//!
//! Services consume the [`crate::domain::repositories::ContentRepository`]
//! trait and return [`crate::dom::Hydration`]s for the HTTP handlers and the
//! CLI.
//!
//! # Available Services
//!
//! - [`services::ArticleService`] - Blog and news detail pages
//! - [`services::ListingService`] - Blog list and news index
//! - [`services::AdminService`] - Admin resource tables
//! - [`services::PlacesService`] - Search results and map markers
//! - [`services::HomeService`] - Home news and weather cards
//! - [`services::PostFormService`] - Create-post form submission

pub mod services;
