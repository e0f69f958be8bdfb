//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Website records, sort keys and source configuration
//! - [`fetcher`] - Upstream fetch contract implemented by the infrastructure layer
//! - [`ranking`] - Sorting and limiting of an aggregated collection
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod fetcher;
pub mod ranking;

pub use fetcher::{FetchError, SourceFetcher};

#[cfg(test)]
pub use fetcher::MockSourceFetcher;
