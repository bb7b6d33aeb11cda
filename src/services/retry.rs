use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// How often, and how patiently, the query layer retries a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero behaves like one.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled after each further failure.
    pub initial_delay_ms: u32,
}

impl RetryPolicy {
    pub const NONE: Self = Self {
        max_attempts: 1,
        initial_delay_ms: 0,
    };
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: crate::config::Config::MAX_RETRY_ATTEMPTS,
            initial_delay_ms: crate::config::Config::RETRY_INITIAL_DELAY_MS,
        }
    }
}

/// Retries an async operation with exponential backoff.
///
/// # Behavior
///
/// - Only transient errors are retried (network failures and 5xx)
/// - All other errors immediately propagate
/// - The last error is returned once attempts are exhausted
pub async fn retry_with_backoff<F, Fut, T>(mut operation: F, policy: RetryPolicy) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut delay_ms = policy.initial_delay_ms;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_transient() && attempt < max_attempts => {
                tracing::warn!(attempt, max_attempts, delay_ms, error = %e, "retrying request");
                if delay_ms > 0 {
                    TimeoutFuture::new(delay_ms).await;
                }
                delay_ms = delay_ms.saturating_mul(2);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
