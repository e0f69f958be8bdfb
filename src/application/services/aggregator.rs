//! Concurrent fan-out over every configured source and fan-in of the results.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::retrying_fetcher::RetryingFetcher;
use crate::domain::FetchError;
use crate::domain::entities::WebsiteCollection;

/// Result of fetching and decoding a single source.
///
/// Produced exactly once per source by its task and consumed exactly once by
/// [`Aggregator::aggregate`].
#[derive(Debug)]
pub struct FetchOutcome {
    pub index: usize,
    pub result: Result<WebsiteCollection, FetchError>,
}

/// Runs one fetch-and-decode task per source and merges their records.
pub struct Aggregator {
    fetcher: Arc<RetryingFetcher>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<RetryingFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches every source concurrently and concatenates their websites.
    ///
    /// All tasks are spawned before any result is awaited, and every task is
    /// allowed to finish before a result is produced. Outcomes are delivered
    /// over a single channel with this call as its only consumer.
    ///
    /// Merged records follow source order. Order is insignificant until the
    /// collection is sorted.
    ///
    /// # Errors
    ///
    /// If any source fails, the failure of the lowest-indexed failing source
    /// is returned and every successful fragment is discarded.
    pub async fn aggregate(
        &self,
        sources: &[String],
        retry_budget: i32,
    ) -> Result<WebsiteCollection, FetchError> {
        let (tx, mut rx) = mpsc::channel::<FetchOutcome>(sources.len().max(1));

        for (index, source) in sources.iter().enumerate() {
            let tx = tx.clone();
            let fetcher = self.fetcher.clone();
            let source = source.clone();

            tokio::spawn(async move {
                let result = fetch_and_decode(&fetcher, &source, retry_budget).await;
                // The receiver is gone only if the request itself was dropped.
                let _ = tx.send(FetchOutcome { index, result }).await;
            });
        }
        drop(tx);

        let mut outcomes: Vec<Option<Result<WebsiteCollection, FetchError>>> =
            sources.iter().map(|_| None).collect();

        while let Some(outcome) = rx.recv().await {
            outcomes[outcome.index] = Some(outcome.result);
        }

        let mut merged = WebsiteCollection::default();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Some(Ok(fragment)) => merged.extend(fragment),
                Some(Err(e)) => return Err(e),
                // Task panicked before reporting.
                None => {
                    return Err(FetchError::TaskAborted {
                        url: sources[index].clone(),
                    });
                }
            }
        }

        debug!(
            sources = sources.len(),
            websites = merged.len(),
            "Aggregated upstream sources"
        );

        Ok(merged)
    }
}

async fn fetch_and_decode(
    fetcher: &RetryingFetcher,
    source: &str,
    retry_budget: i32,
) -> Result<WebsiteCollection, FetchError> {
    let payload = fetcher.fetch(source, retry_budget).await?;

    WebsiteCollection::from_json(&payload).map_err(|e| FetchError::Decode {
        url: source.to_string(),
        message: e.to_string(),
    })
}
