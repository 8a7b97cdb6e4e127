//! Utility functions shared by the data model and the renderers.
//!
//! - [`encode`] - URI component encoding for path segments
//! - [`lenient`] - tolerant serde helpers for loosely typed API fields
//! - [`numbers`] - number parsing and display helpers

pub mod encode;
pub mod lenient;
pub mod numbers;
