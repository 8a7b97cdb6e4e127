//! Page services.
//!
//! Each service issues its page's requests concurrently and renders every
//! section independently: a failed request or template is logged and leaves
//! only its own section untouched.

pub mod admin_service;
pub mod article_service;
pub mod home_service;
pub mod listing_service;
pub mod places_service;
pub mod post_form_service;

pub use admin_service::AdminService;
pub use article_service::ArticleService;
pub use home_service::HomeService;
pub use listing_service::ListingService;
pub use places_service::PlacesService;
pub use post_form_service::{PostFormService, SubmitOutcome};

use crate::dom::Hydration;
use crate::error::FetchError;

/// Logs a failed section request and drops it.
pub(crate) fn section_data<T>(section: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(FetchError::Status { url, status, body }) => {
            tracing::error!(section, %url, status, "Fetch failed: {}", body);
            None
        }
        Err(e) => {
            tracing::error!(section, "Fetch failed: {}", e);
            None
        }
    }
}

/// Keeps a rendered section, or logs the template failure and skips it.
pub(crate) fn section_patches(section: &str, result: askama::Result<Hydration>) -> Hydration {
    result.unwrap_or_else(|e| {
        tracing::error!(section, "Rendering failed: {}", e);
        Hydration::new()
    })
}
