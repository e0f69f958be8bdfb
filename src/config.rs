//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export URL_LIST="https://source-1.example.com/data,https://source-2.example.com/data"
//! export RETRY_COUNT="5"
//! ```
//!
//! ## Required Variables
//!
//! - `URL_LIST` - Comma-separated upstream source URLs (blank entries are skipped)
//! - `RETRY_COUNT` - Additional attempts per source after an initial failure
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:9090`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RETRY_DELAY_MS` - Delay between attempts in milliseconds (default: 100)
//! - `FETCH_TIMEOUT_SECS` - Per-attempt HTTP timeout, `0` disables it (default: 0)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::domain::entities::SourceConfig;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<String>,
    pub retry_count: i32,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Delay slept between attempts against the same source.
    pub retry_delay_ms: u64,
    /// Per-attempt HTTP client timeout; `0` means no timeout.
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `URL_LIST` or `RETRY_COUNT` is missing, or if
    /// `RETRY_COUNT` is not an integer.
    pub fn from_env() -> Result<Self> {
        let url_list = env::var("URL_LIST")
            .context("URL_LIST environment variable not set. Please set to start the server")?;
        let sources = parse_url_list(&url_list);

        let retry_count = env::var("RETRY_COUNT")
            .context("RETRY_COUNT environment variable not set. Please set to start the server")?;
        let retry_count = retry_count
            .trim()
            .parse()
            .with_context(|| format!("RETRY_COUNT must be an integer, got '{retry_count}'"))?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:9090".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let retry_delay_ms = env::var("RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Ok(Self {
            sources,
            retry_count,
            listen_addr,
            log_level,
            log_format,
            retry_delay_ms,
            fetch_timeout_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no sources are configured, or a source is not an `http`/`https` URL
    /// - `retry_count` is negative
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            anyhow::bail!("URL_LIST must contain at least one source URL");
        }

        for source in &self.sources {
            let url =
                Url::parse(source).with_context(|| format!("Invalid source URL '{source}'"))?;
            if !matches!(url.scheme(), "http" | "https") {
                anyhow::bail!("Source URL must use http or https, got '{}'", source);
            }
        }

        if self.retry_count < 0 {
            anyhow::bail!(
                "RETRY_COUNT must be at least 0, got {}",
                self.retry_count
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Immutable source configuration handed to the website service.
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::new(self.sources.clone(), self.retry_count)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout_secs > 0).then(|| Duration::from_secs(self.fetch_timeout_secs))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Sources ({}):", self.sources.len());
        for source in &self.sources {
            tracing::info!("    {}", source);
        }
        tracing::info!("  Retry count: {}", self.retry_count);
        tracing::info!("  Retry delay: {}ms", self.retry_delay_ms);
        match self.fetch_timeout() {
            Some(timeout) => tracing::info!("  Fetch timeout: {}s", timeout.as_secs()),
            None => tracing::info!("  Fetch timeout: disabled"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits `URL_LIST` on commas, trimming entries and dropping blanks.
fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
