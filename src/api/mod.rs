//! HTTP layer of the fragment server.
//!
//! This layer translates HTTP requests into page service calls and returns
//! their hydrations as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Query and body types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
