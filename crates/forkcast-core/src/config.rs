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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
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

    let places_api_key = require("FORKCAST_PLACES_API_KEY")?;
    let enrich_api_key = require("FORKCAST_ENRICH_API_KEY")?;

    let bind_addr = parse("FORKCAST_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("FORKCAST_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("FORKCAST_HTTP_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("FORKCAST_USER_AGENT", "forkcast/0.1 (restaurant-discovery)");

    let places_base_url = lookup("FORKCAST_PLACES_BASE_URL").ok();
    let enrich_base_url = lookup("FORKCAST_ENRICH_BASE_URL").ok();

    Ok(AppConfig {
        places_api_key,
        enrich_api_key,
        bind_addr,
        log_level,
        http_timeout_secs,
        user_agent,
        places_base_url,
        enrich_base_url,
    })
}
