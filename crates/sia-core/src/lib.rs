//! Shared types for the Sales Insights Assistant: the submission form and
//! its validation, the insight prompt template, and application
//! configuration loaded from the environment.

pub mod app_config;
pub mod config;
pub mod form;
pub mod prompt;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use form::{MissingRequiredFields, SalesForm};
pub use prompt::render_insights_prompt;

use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
