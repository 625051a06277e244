use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use socialscope_core::{CoreError, ErrorExt};

/// Configuration for retry behavior around fetch requests. Retrying is
/// the adapter's concern alone; the analytics core never retries.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first try
    pub max_attempts: u32,
    /// Base delay for exponential backoff (in milliseconds)
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds)
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Maximum jitter factor (0.0 to 1.0)
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            max_delay_ms: 30000,
            backoff_multiplier: 2.0,
            jitter_factor: 0.1,
        }
    }
}

impl RetryConfig {
    /// No retries at all; every error surfaces immediately.
    pub fn none() -> Self {
        Self {
            max_attempts: 0,
            ..Self::default()
        }
    }
}

/// Run `operation` with exponential backoff and jitter, retrying only
/// errors the taxonomy marks retryable. A rate-limit error's own
/// retry-after takes precedence over the computed backoff delay.
pub async fn with_backoff<T, F, Fut>(config: &RetryConfig, mut operation: F) -> Result<T, CoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoreError>>,
{
    let mut attempt: u32 = 0;
    let mut delay = Duration::from_millis(config.base_delay_ms);
    let max_delay = Duration::from_millis(config.max_delay_ms);

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    info!("Fetch succeeded after {} retries", attempt);
                }
                return Ok(value);
            }
            Err(error) => {
                if attempt >= config.max_attempts || !error.is_retryable() {
                    return Err(error);
                }

                let wait = error.retry_after().unwrap_or(delay).min(max_delay);
                let jitter = wait.mul_f64(config.jitter_factor * fastrand::f64());
                warn!(
                    "Fetch attempt {} failed ({}), retrying in {:?}",
                    attempt + 1,
                    error,
                    wait + jitter
                );
                sleep(wait + jitter).await;

                delay = delay.mul_f64(config.backoff_multiplier).min(max_delay);
                attempt += 1;
            }
        }
    }
}
