//! HTTP access to the upstream content API.

pub mod http_content_repository;

pub use http_content_repository::HttpContentRepository;
