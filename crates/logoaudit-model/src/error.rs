use thiserror::Error;

/// Errors returned by the scoring client.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Network or TLS failure from the underlying HTTP client. Retriable.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429: the API quota or rate limit is exhausted. Retriable.
    #[error("quota exhausted (retry after {retry_after_secs}s)")]
    QuotaExceeded { retry_after_secs: u64 },

    /// Any other non-2xx response from the API. Retried only for 5xx.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response was not the JSON object the contract requires. The tile
    /// is dropped without retry.
    #[error("malformed response for {context}: {reason}")]
    Malformed { context: String, reason: String },
}
