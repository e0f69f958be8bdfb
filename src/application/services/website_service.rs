//! Website listing: aggregate every source, sort, then limit.

use std::sync::Arc;

use tracing::info;

use super::aggregator::Aggregator;
use crate::domain::entities::{SortKey, SourceConfig, WebsiteCollection};
use crate::domain::ranking::{limit_websites, sort_websites};
use crate::error::AppError;

/// A validated website query.
///
/// Only constructed after the raw query parameters pass validation, see
/// [`crate::api::dto::websites::WebsitesQueryParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebsiteQuery {
    pub sort_key: SortKey,
    pub limit: usize,
}

/// Service answering website queries against the configured sources.
pub struct WebsiteService {
    aggregator: Arc<Aggregator>,
    config: SourceConfig,
}

impl WebsiteService {
    /// Creates a service bound to an immutable source configuration.
    pub fn new(aggregator: Arc<Aggregator>, config: SourceConfig) -> Self {
        Self { aggregator, config }
    }

    pub fn source_count(&self) -> usize {
        self.config.sources().len()
    }

    /// Fetches websites from every source, sorts them by the requested key
    /// and keeps the first `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any source fails after retries or
    /// returns an undecodable payload.
    /// Returns [`AppError::BadRequest`] if `limit` exceeds the number of
    /// websites gathered.
    pub async fn get_websites(&self, query: WebsiteQuery) -> Result<WebsiteCollection, AppError> {
        let mut websites = self
            .aggregator
            .aggregate(self.config.sources(), self.config.retry_budget())
            .await?;

        sort_websites(query.sort_key, &mut websites);
        let websites = limit_websites(query.limit, websites)?;

        info!(
            sort_key = %query.sort_key,
            limit = query.limit,
            "Website query served"
        );

        Ok(websites)
    }
}
