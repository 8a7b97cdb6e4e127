//! Body of `POST /fragments/home`.

use serde::Deserialize;

use crate::domain::entities::{HomeNewsItem, Weather};

/// Data the home page already holds and wants rendered.
#[derive(Debug, Default, Deserialize)]
pub struct HomeRequest {
    #[serde(default)]
    pub news: Vec<HomeNewsItem>,
    #[serde(default)]
    pub weather: Option<Weather>,
}
