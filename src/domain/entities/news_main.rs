use serde::{Deserialize, Serialize};

use super::post::Post;
use crate::utils::lenient;

/// Scheduling window for a featured news story.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsMain {
    #[serde(default)]
    pub news_main_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

/// Row of `/api/v1/news-main`: the window plus the featured post.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsMainRow {
    #[serde(default)]
    pub news_main: Option<NewsMain>,
    #[serde(default)]
    pub post: Option<Post>,
}
