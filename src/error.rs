use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::dom::Hydration;
use crate::forms::FieldErrors;

/// Failure of a single upstream request.
///
/// Every page section owns its own request, so a `FetchError` is logged and
/// aborts only the section that issued it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status} for {url}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status reported by the upstream API, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of a post form submission.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("form validation failed")]
    Invalid(FieldErrors),

    #[error("upstream rejected the post ({status})")]
    Rejected { status: u16, errors: FieldErrors },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload shared by every JSON error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by the fragment server.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// Converts the error into the JSON shape used inside response bodies.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status {
                url, status: 404, ..
            } => AppError::not_found("Upstream resource not found", json!({ "url": url })),
            FetchError::Status { url, status, .. } => AppError::upstream(
                "Upstream API returned an error",
                json!({ "url": url, "status": status }),
            ),
            other => AppError::upstream(
                "Upstream API unavailable",
                json!({ "reason": other.to_string() }),
            ),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        tracing::error!("Template rendering failed: {}", e);
        AppError::internal("Failed to render fragment", json!({}))
    }
}

/// Response for a rejected form: the field error patches plus the error body.
#[derive(Debug, Serialize)]
pub struct FormRejection {
    pub error: ErrorInfo,
    pub hydration: Hydration,
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let (status, error, errors) = match self {
            FormError::InFlight => (
                StatusCode::CONFLICT,
                AppError::conflict("A submission is already in flight", json!({})),
                FieldErrors::default(),
            ),
            FormError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                AppError::bad_request("Form validation failed", json!({})),
                errors,
            ),
            FormError::Rejected { status, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                AppError::bad_request(
                    "Upstream API rejected the post",
                    json!({ "status": status }),
                ),
                errors,
            ),
            FormError::Fetch(e) => {
                let app: AppError = e.into();
                return app.into_response();
            }
        };

        let body = FormRejection {
            error: error.to_error_info(),
            hydration: errors.hydration(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_404_maps_to_not_found() {
        let err = FetchError::Status {
            url: "http://api/api/v1/blog-posts/missing".to_string(),
            status: 404,
            body: String::new(),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::NotFound { .. }));
    }

    #[test]
    fn test_upstream_500_maps_to_bad_gateway() {
        let err = FetchError::Status {
            url: "http://api/x".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_info_code() {
        let info = AppError::bad_request("nope", json!({})).to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "nope");
    }
}
