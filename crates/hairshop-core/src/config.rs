use crate::app_config::{AppConfig, Environment};
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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let csv_url = require("HAIRSHOP_CSV_URL")?;
    if !(csv_url.starts_with("http://") || csv_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "HAIRSHOP_CSV_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{csv_url}\""),
        });
    }

    let env = parse_environment(&or_default("HAIRSHOP_ENV", "development"))?;
    let log_level = or_default("HAIRSHOP_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("HAIRSHOP_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HAIRSHOP_USER_AGENT", "hairshop/0.1 (catalog)");
    let store_path = PathBuf::from(or_default(
        "HAIRSHOP_STORE_PATH",
        "./data/storefront.json",
    ));
    let telegram_init_data = lookup("HAIRSHOP_TELEGRAM_INIT_DATA")
        .ok()
        .filter(|v| !v.trim().is_empty());

    Ok(AppConfig {
        csv_url,
        env,
        log_level,
        http_timeout_secs,
        user_agent,
        store_path,
        telegram_init_data,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HAIRSHOP_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
