//! Retry with exponential backoff for scoring requests.
//!
//! Quota exhaustion, network failures, and 5xx responses are retried after a
//! monotonically non-decreasing delay, up to a bounded attempt count.
//! Malformed responses and other API errors are returned immediately; the
//! pipeline drops that tile and moves on.

use std::future::Future;
use std::time::Duration;

use crate::error::ModelError;

/// Returns `true` for errors that are worth retrying after a backoff delay.
///
/// **Retriable:**
/// - [`ModelError::QuotaExceeded`]: rate limit; the quota refills.
/// - [`ModelError::Http`]: network-level failure (timeout, connection reset).
/// - [`ModelError::ApiError`] with a 5xx status: transient server trouble.
///
/// **Not retriable:**
/// - [`ModelError::ApiError`] with a 4xx status: retrying won't fix it.
/// - [`ModelError::Malformed`]: the model's output violated the contract;
///   the same prompt at temperature 0 would do it again.
fn is_retriable(err: &ModelError) -> bool {
    match err {
        ModelError::QuotaExceeded { .. } | ModelError::Http(_) => true,
        ModelError::ApiError { status, .. } => (500..600).contains(status),
        ModelError::Malformed { .. } => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps `backoff_base_secs * 2^attempt`
/// seconds and tries again, up to `max_retries` additional attempts after the
/// first try. When the error is [`ModelError::QuotaExceeded`] and the server
/// asked for a longer wait, the larger of the two delays is used. If all
/// retries are exhausted the last error is returned.
pub async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ModelError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ModelError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let mut delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        if let ModelError::QuotaExceeded { retry_after_secs } = &err {
            delay_secs = delay_secs.max(*retry_after_secs);
        }
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient scoring error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn quota() -> ModelError {
        ModelError::QuotaExceeded { retry_after_secs: 0 }
    }

    fn malformed() -> ModelError {
        ModelError::Malformed {
            context: "test".to_owned(),
            reason: "not json".to_owned(),
        }
    }

    #[test]
    fn quota_exceeded_is_retriable() {
        assert!(is_retriable(&quota()));
    }

    #[test]
    fn server_error_is_retriable() {
        assert!(is_retriable(&ModelError::ApiError {
            status: 503,
            message: String::new()
        }));
    }

    #[test]
    fn client_error_is_not_retriable() {
        assert!(!is_retriable(&ModelError::ApiError {
            status: 400,
            message: String::new()
        }));
    }

    #[test]
    fn malformed_is_not_retriable() {
        assert!(!is_retriable(&malformed()));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, ModelError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_quota_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                let n = c.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(quota())
                } else {
                    Ok::<u32, ModelError>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn terminates_after_bounded_attempts_on_permanent_quota() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(2, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ModelError>(quota())
            }
        })
        .await;
        // max_retries=2 → 3 total attempts, then the last error surfaces.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(matches!(result, Err(ModelError::QuotaExceeded { .. })));
    }

    #[tokio::test]
    async fn does_not_retry_malformed_response() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ModelError>(malformed())
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(ModelError::Malformed { .. })));
    }
}
