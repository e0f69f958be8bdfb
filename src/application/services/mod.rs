//! Business logic services for the application layer.

pub mod aggregator;
pub mod retrying_fetcher;
pub mod website_service;

pub use aggregator::{Aggregator, FetchOutcome};
pub use retrying_fetcher::RetryingFetcher;
pub use website_service::{WebsiteQuery, WebsiteService};
