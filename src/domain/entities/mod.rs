//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Website`] - One website record decoded from an upstream payload
//! - [`WebsiteCollection`] - The records gathered for a single request
//! - [`SortKey`] - Closed set of orderings a caller may request
//! - [`SourceConfig`] - Upstream sources and retry budget, fixed at startup

pub mod sort_key;
pub mod source_config;
pub mod website;

pub use sort_key::{SortKey, UnknownSortKey};
pub use source_config::SourceConfig;
pub use website::{Website, WebsiteCollection};
