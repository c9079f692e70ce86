//! Shared configuration and rubric contract definitions for the logo audit
//! pipeline.

pub mod app_config;
pub mod config;
pub mod contract;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use contract::{column_prefix, Category, ContractVersion, ResponseFamily};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
