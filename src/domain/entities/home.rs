use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// News teaser injected into the home page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HomeNewsItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
}

/// Current weather card on the home page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Weather {
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub temperature: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
}
