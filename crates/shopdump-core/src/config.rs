use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_API_VERSION};
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
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        let value = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value is empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
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

    let shop_domain = normalize_shop_domain(&require("SHOPIFY_SHOP_DOMAIN")?).ok_or_else(|| {
        ConfigError::InvalidEnvVar {
            var: "SHOPIFY_SHOP_DOMAIN".to_string(),
            reason: "no host name found".to_string(),
        }
    })?;
    let access_token = require("SHOPIFY_ACCESS_TOKEN")?;
    let api_version = or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION);
    let graphql_endpoint = lookup("SHOPDUMP_GRAPHQL_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty());

    let output_path = PathBuf::from(or_default("SHOPDUMP_OUTPUT_PATH", "products.csv"));
    let log_level = or_default("SHOPDUMP_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHOPDUMP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPDUMP_USER_AGENT", "shopdump/0.1 (catalog-export)");

    Ok(AppConfig {
        shop_domain,
        access_token,
        api_version,
        graphql_endpoint,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Reduces a configured shop domain to its bare host.
///
/// Accepts `"acme.myshopify.com"`, `"https://acme.myshopify.com/"` or
/// `"acme.myshopify.com/admin"` and returns `"acme.myshopify.com"` for all
/// of them. Returns `None` when nothing host-like remains.
fn normalize_shop_domain(raw: &str) -> Option<String> {
    let without_scheme = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);
    let host = without_scheme.split('/').next().unwrap_or_default().trim();
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
