//! HTTP client for downloading offers-page snapshots.
//!
//! Only useful for sources that serve their offers server-side (Dirk); the
//! AH and Jumbo grids are rendered client-side and reach the pipeline as
//! snapshot files captured after rendering instead.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::ScrapeError;
use crate::retry::retry_with_backoff;

/// Fallback wait when a 429 response carries no `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP client with configured timeout, `User-Agent`, and retry policy.
///
/// Rate limiting (429), not-found (404) and other non-2xx responses map to
/// typed [`ScrapeError`] variants. Transient errors (429, network failures)
/// are retried with exponential backoff up to `max_retries` additional
/// attempts.
pub struct SnapshotClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl SnapshotClient {
    /// Creates a `SnapshotClient`.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors; set to `0` to disable retries.
    /// `backoff_base_secs` is the base for the exponential backoff delay.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Downloads the HTML body of `url`, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ScrapeError::NotFound`] — HTTP 404 (not retried).
    /// - [`ScrapeError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`ScrapeError::Http`] — network or TLS failure after all retries exhausted.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            self.fetch_page_once(url)
        })
        .await
    }

    async fn fetch_page_once(&self, url: &str) -> Result<String, ScrapeError> {
        tracing::debug!(url, "fetching page snapshot");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            let domain = response
                .url()
                .host_str()
                .unwrap_or("unknown")
                .to_string();
            return Err(ScrapeError::RateLimited {
                domain,
                retry_after_secs,
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
