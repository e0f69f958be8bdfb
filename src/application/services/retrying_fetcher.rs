//! Per-source fetch with a bounded retry budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use metrics::counter;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{error, warn};

use crate::domain::{FetchError, SourceFetcher};

/// Retries a [`SourceFetcher`] until it succeeds or the budget runs out.
///
/// A persistently failing source is attempted `1 + retry_budget` times. The
/// first successful attempt ends the operation; no further attempts are made.
pub struct RetryingFetcher {
    fetcher: Arc<dyn SourceFetcher>,
    retry_delay: Duration,
}

impl RetryingFetcher {
    /// Creates a retrying fetcher that sleeps `retry_delay` between attempts.
    pub fn new(fetcher: Arc<dyn SourceFetcher>, retry_delay: Duration) -> Self {
        Self {
            fetcher,
            retry_delay,
        }
    }

    /// Fetches `source`, retrying failed attempts up to `retry_budget` times.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NegativeRetryBudget`] if `retry_budget < 0`; nothing is fetched.
    /// - [`FetchError::RetriesExhausted`] wrapping the last attempt's failure
    ///   once every attempt has failed.
    pub async fn fetch(&self, source: &str, retry_budget: i32) -> Result<Vec<u8>, FetchError> {
        let retries = usize::try_from(retry_budget)
            .map_err(|_| FetchError::NegativeRetryBudget(retry_budget))?;

        let attempts = AtomicU32::new(0);
        let strategy = FixedInterval::new(self.retry_delay).take(retries);

        let result = RetryIf::spawn(
            strategy,
            || {
                let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
                counter!("upstream_fetch_attempts_total").increment(1);
                if attempt > 1 {
                    counter!("upstream_fetch_retries_total").increment(1);
                    warn!(source, attempt, retry_budget, "Retrying upstream fetch");
                }
                self.fetcher.fetch(source)
            },
            |e: &FetchError| {
                warn!(
                    source,
                    attempt = attempts.load(Ordering::Relaxed),
                    error = %e,
                    "Upstream fetch attempt failed"
                );
                true
            },
        )
        .await;

        result.map_err(|last| {
            let attempts = attempts.load(Ordering::Relaxed);
            counter!("upstream_fetch_failures_total").increment(1);
            error!(source, attempts, error = %last, "Upstream source exhausted its retry budget");
            FetchError::RetriesExhausted {
                url: source.to_string(),
                attempts,
                last: Box::new(last),
            }
        })
    }
}
