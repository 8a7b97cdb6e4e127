//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::endpoint::{Endpoint, ListQuery};
use crate::domain::repositories::ContentRepository;
use crate::state::AppState;

/// Returns service health status with dependency checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Upstream API reachable
/// - **503 Service Unavailable**: Upstream API failing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "upstream": { "status": "ok", "message": "Upstream API reachable" },
///     "fallback_places": { "status": "ok", "message": "42 places loaded" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let upstream = check_upstream(&state).await;
    let fallback_places = check_fallback(&state);

    let healthy = upstream.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upstream,
            fallback_places,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Requests one blog post row from the upstream API.
async fn check_upstream(state: &AppState) -> CheckStatus {
    let endpoint = Endpoint::list("blog-posts", ListQuery::per_page(1));
    match state.repository.get_json(&endpoint).await {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Upstream API reachable".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Upstream error: {}", e)),
        },
    }
}

/// Reports the locally known places; an empty list is not an error.
fn check_fallback(state: &AppState) -> CheckStatus {
    if state.fallback_places == 0 {
        CheckStatus {
            status: "disabled".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} places loaded", state.fallback_places)),
        }
    }
}
