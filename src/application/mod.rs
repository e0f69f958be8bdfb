//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: it drives the upstream fetch
//! contract concurrently, merges results and applies ranking rules. Handlers
//! talk to it through [`services::WebsiteService`].
//!
//! # Available Services
//!
//! - [`services::retrying_fetcher::RetryingFetcher`] - Per-source fetch with a retry budget
//! - [`services::aggregator::Aggregator`] - Concurrent fan-out/fan-in over all sources
//! - [`services::website_service::WebsiteService`] - Aggregate, sort and limit for one query

pub mod services;
