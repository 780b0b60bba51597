use std::net::SocketAddr;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup instead of
/// `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let groq_api_key = require("GROQ_API_KEY")?;
    let tavily_api_key = lookup("TAVILY_API_KEY").ok();

    let bind_addr = parse_addr("SIA_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SIA_LOG_LEVEL", "info");
    let llm_model = or_default("SIA_LLM_MODEL", "llama-3.3-70b-versatile");

    // The settings panel advertises a 1–10 range for this cap; out-of-range
    // values from the environment are clamped rather than rejected, no
    // matter how large. Only a non-numeric value is an error.
    let raw_cap = parse_u64("SIA_SEARCH_MAX_RESULTS", "2")?;
    let search_max_results = u8::try_from(raw_cap).unwrap_or(u8::MAX).clamp(1, 10);

    Ok(AppConfig {
        groq_api_key,
        tavily_api_key,
        bind_addr,
        log_level,
        llm_model,
        search_max_results,
    })
}
