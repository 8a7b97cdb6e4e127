//! Repository trait definitions for the domain layer.
//!
//! The hydrator has a single data source, the upstream REST API, abstracted
//! by [`ContentRepository`]. The reqwest implementation lives in
//! `crate::infrastructure::http`; page services are tested against the
//! `mockall` mock.

pub mod content_repository;

pub use content_repository::{ContentRepository, fetch_list, fetch_one};

#[cfg(test)]
pub use content_repository::MockContentRepository;
