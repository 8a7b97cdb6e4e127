//! Data Transfer Objects for the fragment endpoints.
//!
//! Request DTOs use Serde with `serde_with` for query string parsing;
//! responses are [`crate::dom::Hydration`]s serialized as JSON.

pub mod health;
pub mod home;
pub mod query;
