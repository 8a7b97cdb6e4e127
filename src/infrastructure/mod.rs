//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest implementation of the content repository
//! - [`fallback`] - Locally configured places used when the API is down

pub mod fallback;
pub mod http;
