//! API route configuration.

use crate::api::handlers::websites_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Versioned API routes.
///
/// # Endpoints
///
/// - `GET /v1/websites?sortKey=…&limit=…` - Ranked websites aggregated from all sources
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/v1/websites", get(websites_handler))
}
