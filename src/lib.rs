//! # Website Aggregator
//!
//! Answers one query: fetch ranked website metadata from N upstream sources,
//! merge, sort, and return the top K.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Website records, sort keys, fetch contract, ranking
//! - **Application Layer** ([`application`]) - Retrying fetch, concurrent aggregation, query service
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP transport to upstream sources
//! - **API Layer** ([`api`]) - REST handlers, DTOs, query validation and middleware
//!
//! ## Request Flow
//!
//! 1. Query parameters are validated (`sortKey`, `limit`)
//! 2. One task per source fetches and decodes its payload, retrying failures
//! 3. All outcomes are drained from a single channel and merged
//! 4. The merged collection is sorted ascending and truncated to `limit`
//!
//! ## Quick Start
//!
//! ```bash
//! export URL_LIST="https://source-1.example.com/data,https://source-2.example.com/data"
//! export RETRY_COUNT=5
//! cargo run
//!
//! curl 'http://localhost:9090/api/v1/websites?sortKey=views&limit=10'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{Aggregator, RetryingFetcher, WebsiteService};
    pub use crate::domain::entities::{SortKey, SourceConfig, Website, WebsiteCollection};
    pub use crate::domain::{FetchError, SourceFetcher};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
