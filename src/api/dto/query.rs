//! Query string parameters of the fragment endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};

/// `?page=` of the blog list.
///
/// Uses `serde_with` to parse numbers from query strings; an empty value
/// counts as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<u32>,
}

impl PageParams {
    /// Requested page; missing or zero means the first page.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

/// `?per_page=&include_content=&csrf_token=` of the admin tables.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AdminListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub include_content: Option<bool>,

    /// Token forwarded into the rendered delete forms.
    #[serde(default)]
    pub csrf_token: Option<String>,
}

/// `?q=` of the search map.
#[derive(Debug, Default, Deserialize)]
pub struct MapParams {
    #[serde(default)]
    pub q: Option<String>,
}
