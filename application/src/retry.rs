//! Bounded retry for transient store faults.
//!
//! Only [`CoreError::StoreUnavailable`] qualifies: every other error is a
//! definitive verdict and retrying would just repeat it. Callers apply this
//! to idempotent operations only (reads and the vote upsert); state
//! transitions such as ballot closure are never blindly re-run.

use std::future::Future;
use std::time::Duration;

use plenum_domain::CoreError;
use tracing::warn;

/// How often and how patiently to retry a transient fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Delay before the first retry; doubles each attempt after that.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Backoff before the retry following attempt number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Run `call` until it succeeds, fails non-retryably, or the policy is spent.
pub(crate) async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    op: &str,
    mut call: F,
) -> Result<T, CoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoreError>>,
{
    let mut attempt = 1;
    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.attempts => {
                let delay = policy.delay_for(attempt);
                warn!(
                    "{} hit a transient fault (attempt {}/{}), retrying in {:?}: {}",
                    op, attempt, policy.attempts, delay, err
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
