//! Vision-model scoring for logo tiles.
//!
//! Sends one tile image plus a rubric prompt to the Gemini `generateContent`
//! endpoint, normalizes the JSON response, and validates it into a typed
//! [`AuditResult`]. Quota and transport failures are retried with exponential
//! backoff; malformed responses are dropped without retry.

pub mod client;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod retry;
pub mod types;

pub use client::GeminiClient;
pub use error::ModelError;
pub use normalize::{normalize_keys, parse_audit};
pub use prompt::build_prompt;
pub use retry::retry_with_backoff;
pub use types::{AuditResult, CategoryDetail, CategoryResult};
