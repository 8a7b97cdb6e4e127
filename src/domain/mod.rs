//! Domain layer: view-models, endpoints and the repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - View-models decoded from the upstream API
//! - [`endpoint`] - Typed description of every upstream request
//! - [`repositories`] - Data access trait definitions
//! - [`place_search`] - Local place ranking used when search is unavailable
//!
//! The domain layer has no dependency on axum or reqwest; the
//! [`repositories::ContentRepository`] contract is implemented in
//! `crate::infrastructure`.

pub mod endpoint;
pub mod entities;
pub mod place_search;
pub mod repositories;
