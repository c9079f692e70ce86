use std::path::PathBuf;

/// Runtime configuration for the audit pipeline, resolved from environment
/// variables at startup.
#[derive(Clone)]
pub struct AppConfig {
    /// API key for the Gemini REST API. Required for audit runs; slicing
    /// works without it.
    pub gemini_api_key: Option<String>,
    pub model_name: String,
    pub log_level: String,
    /// Where the composite grid screenshots live.
    pub screenshots_dir: PathBuf,
    /// Where sliced tiles are written, one subdirectory per batch.
    pub slices_dir: PathBuf,
    pub report_path: PathBuf,
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// Pacing delay applied after every model request, successful or not.
    pub inter_request_delay_secs: u64,
    /// Per-batch cap for stratified sampling. `0` audits everything.
    pub sample_limit: usize,
    /// Seed for reproducible sampling. Unseeded when `None`.
    pub sample_seed: Option<u64>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("model_name", &self.model_name)
            .field("log_level", &self.log_level)
            .field("screenshots_dir", &self.screenshots_dir)
            .field("slices_dir", &self.slices_dir)
            .field("report_path", &self.report_path)
            .field("grid_rows", &self.grid_rows)
            .field("grid_cols", &self.grid_cols)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("inter_request_delay_secs", &self.inter_request_delay_secs)
            .field("sample_limit", &self.sample_limit)
            .field("sample_seed", &self.sample_seed)
            .finish()
    }
}
