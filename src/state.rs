//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{Aggregator, RetryingFetcher, WebsiteService};
use crate::domain::SourceFetcher;
use crate::domain::entities::SourceConfig;

#[derive(Clone)]
pub struct AppState {
    pub website_service: Arc<WebsiteService>,
}

impl AppState {
    pub fn new(website_service: Arc<WebsiteService>) -> Self {
        Self { website_service }
    }

    /// Wires the service stack on top of a single-attempt `fetcher`.
    pub fn from_fetcher(
        fetcher: Arc<dyn SourceFetcher>,
        sources: SourceConfig,
        retry_delay: Duration,
    ) -> Self {
        let retrying = Arc::new(RetryingFetcher::new(fetcher, retry_delay));
        let aggregator = Arc::new(Aggregator::new(retrying));
        Self::new(Arc::new(WebsiteService::new(aggregator, sources)))
    }
}
