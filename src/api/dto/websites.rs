//! DTOs for the website listing endpoint.

use serde::Serialize;

use crate::application::services::WebsiteQuery;
use crate::domain::entities::{SortKey, Website, WebsiteCollection};
use crate::error::AppError;

/// Exclusive bounds for the `limit` query parameter.
const MIN_LIMIT_EXCLUSIVE: i64 = 1;
const MAX_LIMIT_EXCLUSIVE: i64 = 200;

/// Raw query parameters of `GET /api/v1/websites`.
///
/// Both fields are kept as strings so that validation can report missing,
/// malformed and out-of-range values with distinct messages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WebsitesQueryParams {
    pub sort_key: String,
    pub limit: String,
}

impl WebsitesQueryParams {
    /// Picks `sortKey` and `limit` out of the decoded query string.
    ///
    /// A repeated parameter resolves to its first occurrence, an absent one
    /// to the empty string. Unknown parameters are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            sort_key: first("sortKey"),
            limit: first("limit"),
        }
    }

    /// Validates the query parameters.
    ///
    /// Checks run in order and the first failure wins:
    ///
    /// 1. Either parameter empty (400)
    /// 2. `sortKey` not `relevanceScore` or `views` (400)
    /// 3. `limit` not an integer (500)
    /// 4. `limit` outside the open range `(1, 200)` (400)
    pub fn validate(&self) -> Result<WebsiteQuery, AppError> {
        if self.sort_key.is_empty() || self.limit.is_empty() {
            return Err(AppError::bad_request(format!(
                "sortKey and limit can't be empty. sortkey: {}, limit: {}",
                self.sort_key, self.limit
            )));
        }

        let sort_key: SortKey = self.sort_key.parse().map_err(|_| {
            AppError::bad_request(format!(
                "invalid value of sortKey {} it could be either relevanceScore or views",
                self.sort_key
            ))
        })?;

        let limit: i64 = self.limit.parse().map_err(|e| {
            AppError::internal(format!("invalid value of limit {}: {}", self.limit, e))
        })?;

        if limit <= MIN_LIMIT_EXCLUSIVE || limit >= MAX_LIMIT_EXCLUSIVE {
            return Err(AppError::bad_request(format!(
                "invalid value of limit {} it could be either greater than 1 or less than 200",
                limit
            )));
        }

        // In (1, 200), so the conversion cannot fail.
        let limit = usize::try_from(limit).unwrap_or_default();

        Ok(WebsiteQuery { sort_key, limit })
    }
}

/// Successful response: the sorted, limited websites and their count.
///
/// `count` is derived from `data` on construction and cannot be set
/// independently.
#[derive(Debug, Serialize)]
pub struct WebsitesResponse {
    data: Vec<Website>,
    count: usize,
}

impl WebsitesResponse {
    pub fn data(&self) -> &[Website] {
        &self.data
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl From<WebsiteCollection> for WebsitesResponse {
    fn from(websites: WebsiteCollection) -> Self {
        let data = websites.into_vec();
        let count = data.len();
        Self { data, count }
    }
}
