use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, which is
/// useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let gemini_api_key = lookup("GEMINI_API_KEY").ok();
    let model_name = or_default("LOGOAUDIT_MODEL_NAME", "gemini-2.5-flash-lite");
    let log_level = or_default("LOGOAUDIT_LOG_LEVEL", "info");

    let screenshots_dir = PathBuf::from(or_default(
        "LOGOAUDIT_SCREENSHOTS_DIR",
        "./input_screenshots",
    ));
    let slices_dir = PathBuf::from(or_default("LOGOAUDIT_SLICES_DIR", "./output_slices"));
    let report_path = PathBuf::from(or_default("LOGOAUDIT_REPORT_PATH", "./audit_report.csv"));

    let grid_rows = parse_u32("LOGOAUDIT_GRID_ROWS", "10")?;
    let grid_cols = parse_u32("LOGOAUDIT_GRID_COLS", "3")?;

    let request_timeout_secs = parse_u64("LOGOAUDIT_REQUEST_TIMEOUT_SECS", "120")?;
    let max_retries = parse_u32("LOGOAUDIT_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("LOGOAUDIT_RETRY_BACKOFF_BASE_SECS", "20")?;
    let inter_request_delay_secs = parse_u64("LOGOAUDIT_INTER_REQUEST_DELAY_SECS", "4")?;

    let sample_limit = parse_usize("LOGOAUDIT_SAMPLE_LIMIT", "0")?;
    let sample_seed = match lookup("LOGOAUDIT_SAMPLE_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "LOGOAUDIT_SAMPLE_SEED".to_string(),
                    reason: e.to_string(),
                })?,
        ),
        Err(_) => None,
    };

    Ok(AppConfig {
        gemini_api_key,
        model_name,
        log_level,
        screenshots_dir,
        slices_dir,
        report_path,
        grid_rows,
        grid_cols,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_secs,
        inter_request_delay_secs,
        sample_limit,
        sample_seed,
    })
}
