//! Bounded retry with linear backoff for provider calls.

use std::future::Future;
use std::time::Duration;

use super::ProviderError;

/// Retry policy for outbound provider requests.
///
/// Only retryable failures (transport errors and server-class responses)
/// consume retry attempts; client-class responses fail on the first try.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempts after the first call, so `max_retries = 3` means up to
    /// four requests on the wire.
    pub max_retries: u32,
    /// Base delay; attempt `n` waits `n * backoff_base`.
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff_base: Duration::from_millis(500),
        }
    }

    /// Fail-fast policy for tests and latency-sensitive callers.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_base: Duration::ZERO,
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base * attempt
    }
}

/// Run `call` under `policy`, sleeping between attempts.
pub(crate) async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut call: F) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 0;
    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_retries || !error.is_retryable() {
                    return Err(error);
                }
                attempt += 1;
                tracing::debug!("provider call failed (attempt {attempt}): {error}; retrying");
                tokio::time::sleep(policy.backoff(attempt)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::cell::Cell;

    fn instant_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            backoff_base: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn retries_server_errors_until_budget_exhausted() {
        let attempts = Cell::new(0u32);
        let result: Result<(), _> = with_retry(&instant_policy(2), || {
            attempts.set(attempts.get() + 1);
            async { Err(ProviderError::Status(StatusCode::INTERNAL_SERVER_ERROR)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 3);
    }

    #[tokio::test]
    async fn does_not_retry_client_errors() {
        let attempts = Cell::new(0u32);
        let result: Result<(), _> = with_retry(&instant_policy(3), || {
            attempts.set(attempts.get() + 1);
            async { Err(ProviderError::Status(StatusCode::UNPROCESSABLE_ENTITY)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }

    #[tokio::test]
    async fn zero_retry_policy_fails_fast() {
        let attempts = Cell::new(0u32);
        let result: Result<(), _> = with_retry(&RetryPolicy::none(), || {
            attempts.set(attempts.get() + 1);
            async { Err(ProviderError::Status(StatusCode::BAD_GATEWAY)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }

    #[tokio::test]
    async fn returns_first_success() {
        let attempts = Cell::new(0u32);
        let result = with_retry(&instant_policy(3), || {
            let n = attempts.get() + 1;
            attempts.set(n);
            async move {
                if n < 3 {
                    Err(ProviderError::Status(StatusCode::BAD_GATEWAY))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
    }
}
