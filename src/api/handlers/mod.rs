//! HTTP request handlers for API endpoints.

pub mod health;
pub mod websites;

pub use health::health_handler;
pub use websites::websites_handler;
