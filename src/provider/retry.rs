//! Retry policy for provider calls.
//!
//! The policy is injected by the caller; nothing downstream of it retries.
//! Only transient errors ([`ProviderError::is_retryable`]) are re-issued,
//! with exponential backoff capped at a maximum delay.

use std::time::Duration;

use super::{CompletionClient, CompletionRequest, ProviderError};

/// Default attempt budget for a single generation action.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
pub const RETRY_BASE_DELAY_MS: u64 = 500;

/// Maximum delay for exponential backoff (milliseconds).
pub const RETRY_MAX_DELAY_MS: u64 = 8_000;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(RETRY_BASE_DELAY_MS),
            max_delay: Duration::from_millis(RETRY_MAX_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Set the attempt budget. Zero is treated as one attempt.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the base backoff delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Backoff delay before the retry following `attempt` (zero-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Run one provider call under this policy.
    pub async fn run<C: CompletionClient>(
        &self,
        client: &C,
        req: &CompletionRequest,
    ) -> Result<String, ProviderError> {
        let mut attempt = 0u32;
        loop {
            match client.complete(req).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt + 1 < self.max_attempts => {
                    let delay = self.delay_for_attempt(attempt);
                    tracing::warn!(
                        "provider call failed (attempt {}/{}), retrying in {:?}: {err}",
                        attempt + 1,
                        self.max_attempts,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
