//! HTTP client for the Gemini `generateContent` REST endpoint.
//!
//! One multimodal request per tile: the rubric prompt as a text part, the
//! tile PNG as an inline base64 part, and a generation config pinning
//! deterministic decoding with a JSON response MIME type.

use std::time::Duration;

use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini REST API.
///
/// Holds the HTTP client, API key, model name, and base URL. Use
/// [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`] to
/// point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model_name: &str, timeout_secs: u64) -> Result<Self, ModelError> {
        Self::with_base_url(api_key, model_name, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model_name: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("logoaudit/0.1 (design-audit)")
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model_name: model_name.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Scores one tile: sends the prompt and PNG bytes, returns the parsed
    /// rubric JSON object.
    ///
    /// # Errors
    ///
    /// - [`ModelError::QuotaExceeded`] on HTTP 429 (retriable).
    /// - [`ModelError::Http`] on network failure (retriable).
    /// - [`ModelError::ApiError`] on any other non-2xx status.
    /// - [`ModelError::Malformed`] if the response lacks a candidate text
    ///   part or that text does not parse as a single JSON object.
    pub async fn score_tile(
        &self,
        prompt: &str,
        png_bytes: &[u8],
    ) -> Result<serde_json::Value, ModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_owned(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_owned(),
                            data: base64::engine::general_purpose::STANDARD.encode(png_bytes),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_owned(),
                temperature: 0.0,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(20);
            return Err(ModelError::QuotaExceeded { retry_after_secs });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| ModelError::Malformed {
                context: format!("generateContent({})", self.model_name),
                reason: format!("response envelope: {e}"),
            })?;

        let raw_text = envelope
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| ModelError::Malformed {
                context: format!("generateContent({})", self.model_name),
                reason: "no candidate text part".to_owned(),
            })?;

        let stripped = strip_code_fences(raw_text);
        let value: serde_json::Value =
            serde_json::from_str(stripped).map_err(|e| ModelError::Malformed {
                context: format!("generateContent({})", self.model_name),
                reason: format!("candidate text is not valid JSON: {e}"),
            })?;

        if !value.is_object() {
            return Err(ModelError::Malformed {
                context: format!("generateContent({})", self.model_name),
                reason: "candidate JSON is not an object".to_owned(),
            });
        }

        Ok(value)
    }
}

/// Removes Markdown code-fence markers the model sometimes wraps around its
/// JSON output.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}
