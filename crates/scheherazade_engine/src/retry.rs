//! Retry policy for generation backend calls.
//!
//! Retry behavior is an explicit policy value rather than inline control
//! flow, so it can be tested with a fake backend that fails N times and
//! then succeeds.

use scheherazade_core::GenerationRequest;
use scheherazade_error::{
    BackendError, BackendErrorKind, ScheherazadeError, ScheherazadeErrorKind, ScheherazadeResult,
};
use scheherazade_interface::ScheherazadeDriver;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::warn;

/// Exponential backoff policy for driver calls.
///
/// `max_attempts` counts the first call, so `3` means at most two retries.
/// Only transient failures (and empty responses) are retried; permanent
/// failures surface immediately. When the budget runs out the last failure
/// is wrapped in `BackendErrorKind::Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first call
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Backoff before the first retry, in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    /// Upper bound on any single backoff delay, in seconds
    #[serde(default = "default_max_delay_secs")]
    pub max_delay_secs: u64,
}

fn default_max_attempts() -> usize {
    3
}

fn default_initial_backoff_ms() -> u64 {
    1000
}

fn default_max_delay_secs() -> u64 {
    30
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_delay_secs: default_max_delay_secs(),
        }
    }
}

impl RetryPolicy {
    /// Create a policy; `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: usize, initial_backoff_ms: u64, max_delay_secs: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff_ms,
            max_delay_secs,
        }
    }

    /// Call the driver under this policy.
    ///
    /// # Errors
    ///
    /// Returns the driver's error unchanged for permanent failures, or
    /// `BackendErrorKind::Exhausted` once transient failures have consumed
    /// the attempt budget.
    pub async fn call<D: ScheherazadeDriver + ?Sized>(
        &self,
        driver: &D,
        req: &GenerationRequest,
    ) -> ScheherazadeResult<String> {
        let strategy = ExponentialBackoff::from_millis(self.initial_backoff_ms)
            .factor(2)
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .map(jitter)
            .take(self.max_attempts.saturating_sub(1));

        let result = Retry::spawn(strategy, || async move {
            match driver.generate(req).await {
                Ok(text) if text.trim().is_empty() => {
                    warn!(provider = driver.provider_name(), "Empty response, will retry");
                    Err(RetryError::Transient {
                        err: ScheherazadeError::from(BackendError::new(
                            BackendErrorKind::EmptyResponse,
                        )),
                        retry_after: None,
                    })
                }
                Ok(text) => Ok(text),
                Err(err) => {
                    if is_retryable(&err) {
                        warn!(provider = driver.provider_name(), error = %err, "Transient backend failure, will retry");
                        Err(RetryError::Transient {
                            err,
                            retry_after: None,
                        })
                    } else {
                        warn!(provider = driver.provider_name(), error = %err, "Permanent backend failure, failing immediately");
                        Err(RetryError::Permanent(err))
                    }
                }
            }
        })
        .await;

        match result {
            Ok(text) => Ok(text),
            Err(err) if is_retryable(&err) => Err(BackendError::new(BackendErrorKind::Exhausted {
                attempts: self.max_attempts,
                last_error: err.to_string(),
            })
            .into()),
            Err(err) => Err(err),
        }
    }
}

/// A failure is retryable when its backend kind says so.
fn is_retryable(err: &ScheherazadeError) -> bool {
    matches!(err.kind(), ScheherazadeErrorKind::Backend(e) if e.kind.is_retryable())
}
