//! Handler for the ranked website listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{error, info};

use crate::api::dto::websites::{WebsitesQueryParams, WebsitesResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Fetches websites from every configured source, merges, sorts and limits them.
///
/// # Endpoint
///
/// `GET /api/v1/websites`
///
/// # Query Parameters
///
/// - `sortKey` (required): `relevanceScore` or `views`, ascending
/// - `limit` (required): integer in the open range `(1, 200)`
///
/// A repeated parameter takes its first value.
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     { "url": "www.example.com/abc1", "views": 1000, "relevanceScore": 0.1 },
///     { "url": "www.example.com/abc2", "views": 2000, "relevanceScore": 0.2 }
///   ],
///   "count": 2
/// }
/// ```
///
/// # Errors
///
/// Returns `{"Message", "ErrorCode"}` with:
///
/// - **400 Bad Request**: missing or invalid `sortKey`, `limit` out of range,
///   or `limit` larger than the number of websites gathered
/// - **500 Internal Server Error**: non-integer `limit`, an upstream source
///   failed after exhausting its retries, or returned an undecodable payload
pub async fn websites_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<WebsitesResponse>, AppError> {
    let validated = query
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
        .and_then(|Query(pairs)| WebsitesQueryParams::from_pairs(&pairs).validate());

    let result = match validated {
        Ok(query) => state.website_service.get_websites(query).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(websites) => Ok(Json(WebsitesResponse::from(websites))),
        Err(e @ AppError::BadRequest { .. }) => {
            info!(error = %e, "Rejected website query");
            Err(e)
        }
        Err(e) => {
            error!(error = %e, "Unable to handle website query");
            Err(e)
        }
    }
}
