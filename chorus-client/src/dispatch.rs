//! Parallel candidate dispatch with bounded concurrency

use crate::error::RunError;
use crate::retry::{retry, RetryConfig};
use chorus_core::{Candidate, Provider, Request};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Default cap on simultaneously in-flight generation units
const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Fans one request out into N independent generation units
///
/// Each unit submits the shared request, retries transient failures under its
/// own backoff schedule, and resolves to exactly one `Candidate` in the slot
/// matching its submission index. A unit that exhausts its attempts becomes a
/// failed candidate; it never aborts the dispatch or its siblings. The only
/// dispatch-level error is a candidate count below 1.
///
/// Concurrency is capped at `min(n, max_concurrency)` with a fair semaphore;
/// a unit holds its permit through its retries and backoff sleeps, so the cap
/// bounds units in flight rather than raw requests. Correctness does not
/// depend on parallelism: a cap of 1 runs the same logic sequentially with
/// identical results.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    max_concurrency: usize,
    retry: RetryConfig,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher with the default cap and retry policy
    pub fn new() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            retry: RetryConfig::default(),
        }
    }

    /// Set the concurrency cap
    pub fn with_max_concurrency(mut self, cap: usize) -> Self {
        self.max_concurrency = cap.max(1);
        self
    }

    /// Set the per-unit retry policy
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Run `n` independent generation units for one request
    ///
    /// Returns exactly `n` candidates, slot `i` holding unit `i`'s outcome
    /// regardless of completion order.
    pub async fn dispatch<P>(
        &self,
        provider: Arc<P>,
        request: Request,
        n: usize,
    ) -> Result<Vec<Candidate>, RunError>
    where
        P: Provider + 'static,
    {
        if n < 1 {
            return Err(RunError::InvalidCandidateCount(n));
        }

        let permits = Arc::new(Semaphore::new(self.max_concurrency.min(n)));
        let request = Arc::new(request);

        let handles: Vec<_> = (0..n)
            .map(|index| {
                let provider = Arc::clone(&provider);
                let request = Arc::clone(&request);
                let permits = Arc::clone(&permits);
                let retry_config = self.retry.clone();

                tokio::spawn(async move {
                    let _permit = permits
                        .acquire_owned()
                        .await
                        .expect("semaphore never closed");

                    match retry(&retry_config, || provider.request((*request).clone())).await {
                        Ok(response) => {
                            debug!(unit = index, "candidate generation completed");
                            Candidate::success(index, response.content)
                        }
                        Err(error) => {
                            warn!(unit = index, error = %error, "candidate generation failed");
                            Candidate::failure(index)
                        }
                    }
                })
            })
            .collect();

        // Pre-filled with failures so a panicked task forfeits only its own slot
        let mut results: Vec<Candidate> = (0..n).map(Candidate::failure).collect();
        for outcome in join_all(handles).await {
            match outcome {
                Ok(candidate) => {
                    let slot = candidate.index;
                    results[slot] = candidate;
                }
                Err(join_error) => {
                    warn!(error = %join_error, "generation unit panicked");
                }
            }
        }

        Ok(results)
    }
}
