//! Upstream source access: the single-attempt fetch contract and its errors.

use async_trait::async_trait;
use thiserror::Error;

/// Failures produced while fetching or decoding one upstream source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Retry budget is a configuration value and must not be negative.
    #[error("retry count {0} cannot be less than 0")]
    NegativeRetryBudget(i32),

    #[error("error in fetching the data from the server. url: {url}, status code: {status}")]
    Status { url: String, status: u16 },

    #[error("error in fetching the data from the server. url: {url}, error: {message}")]
    Transport { url: String, message: String },

    #[error("error in converting byte array into websites object. url: {url}, error: {message}")]
    Decode { url: String, message: String },

    /// Every attempt failed; `last` is the failure of the final attempt.
    #[error("failed to fetch data from {url} after {attempts} attempts: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },

    /// The task fetching `url` panicked. Release builds unwind, so this is
    /// reported instead of taking the process down.
    #[error("fetch task for {url} terminated without reporting a result")]
    TaskAborted { url: String },
}

/// Performs exactly one fetch of an upstream source.
///
/// Retrying is layered on top by
/// [`crate::application::services::RetryingFetcher`]; implementations must
/// not retry on their own and must carry no per-request mutable state.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpSourceFetcher`] - `GET` over a pooled `reqwest` client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetches the raw payload served at `source`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for any status other than `200 OK` and
    /// [`FetchError::Transport`] if the request or body read fails.
    async fn fetch(&self, source: &str) -> Result<Vec<u8>, FetchError>;
}
