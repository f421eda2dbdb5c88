/// Application configuration, loaded from environment variables.
///
/// Every field has a default; the binary runs without any environment
/// setup. See [`crate::load_app_config`] for the variable names.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Per-request timeout for snapshot downloads.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with snapshot downloads.
    pub user_agent: String,
    /// Retry attempts after the first failure for transient fetch errors.
    pub max_retries: u32,
    /// Base delay in seconds for exponential retry backoff.
    pub retry_backoff_base_secs: u64,
    /// Offer window length in days for Dirk, whose cards carry only an end
    /// date. Dirk folders have been observed with both 6- and 7-day windows,
    /// so this stays configuration rather than a constant.
    pub dirk_window_days: u32,
}
