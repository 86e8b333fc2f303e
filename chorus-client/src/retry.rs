//! Retry combinator for transient backend failures

use chorus_core::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, the first one included
    pub max_attempts: u32,
    /// Backoff before the first retry
    pub initial_backoff: Duration,
    /// Multiplier applied to the backoff after each failed attempt
    pub backoff_multiplier: f64,
    /// Ceiling on any single backoff
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Backoff to wait after the given zero-based failed attempt
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let base = self.initial_backoff.as_millis() as f64;
        let backoff_ms = base * self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(backoff_ms as u64);

        std::cmp::min(backoff, self.max_backoff)
    }
}

/// Run an operation until it succeeds or the attempt cap is reached
///
/// Every error counts as retryable: the pipeline treats the backend's failure
/// taxonomy as opaque, and the attempt cap bounds the damage either way. The
/// last error is returned once the cap is hit.
pub async fn retry<F, Fut, T>(config: &RetryConfig, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match op().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempt = attempt + 1, "request succeeded after retries");
                }
                return Ok(value);
            }
            Err(error) => {
                attempt += 1;

                if attempt >= config.max_attempts {
                    warn!(
                        attempts = attempt,
                        error = %error,
                        "max retry attempts reached"
                    );
                    return Err(error);
                }

                let backoff = config.backoff_for(attempt - 1);
                debug!(
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %error,
                    "request failed, retrying"
                );
                sleep(backoff).await;
            }
        }
    }
}
