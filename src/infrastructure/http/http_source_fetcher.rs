//! `reqwest`-backed implementation of [`SourceFetcher`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::domain::{FetchError, SourceFetcher};

/// Fetches upstream sources with a plain HTTP `GET`.
///
/// The inner [`Client`] pools connections and is shared read-only by every
/// concurrent fetch.
#[derive(Clone)]
pub struct HttpSourceFetcher {
    client: Client,
}

impl HttpSourceFetcher {
    /// Wraps an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client with an optional per-attempt timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: source.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: source.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: source.to_string(),
            message: e.to_string(),
        })?;

        debug!(source, bytes = body.len(), "Fetched upstream payload");

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_on_200() {
        let server = MockServer::start().await;
        let body = r#"{"data":[{"url":"www.example.com/abc1","views":1000,"relevanceScore":0.1}]}"#;

        Mock::given(method("GET"))
            .and(path("/getData"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpSourceFetcher::new(Client::new());
        let url = format!("{}/getData", server.uri());

        let payload = fetcher.fetch(&url).await.unwrap();

        assert_eq!(payload, body.as_bytes());
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_200_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpSourceFetcher::new(Client::new());
        let url = format!("{}/getData", server.uri());

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500, .. }));
        assert_eq!(
            err.to_string(),
            format!("error in fetching the data from the server. url: {url}, status code: 500")
        );
    }

    #[tokio::test]
    async fn test_fetch_treats_other_success_codes_as_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let fetcher = HttpSourceFetcher::new(Client::new());

        let err = fetcher.fetch(&server.uri()).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_fetch_reports_transport_errors() {
        let fetcher = HttpSourceFetcher::new(Client::new());

        let err = fetcher.fetch("not a url").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport { ref url, .. } if url == "not a url"));
    }

    #[tokio::test]
    async fn test_with_timeout_builds_client() {
        assert!(HttpSourceFetcher::with_timeout(Some(Duration::from_secs(5))).is_ok());
        assert!(HttpSourceFetcher::with_timeout(None).is_ok());
    }
}
