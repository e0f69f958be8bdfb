//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and the number of configured sources.
///
/// # Endpoint
///
/// `GET /health`
///
/// Upstream sources are not probed; a healthy response only means the
/// process is serving requests.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sources: state.website_service.source_count(),
    })
}
