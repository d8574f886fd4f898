use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value. Every
/// variable has a default, so an empty environment always succeeds.
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
/// Returns `ConfigError` if a set env var has an invalid value.
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

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let directory_url = or_default(
        "METROCOLLECT_DIRECTORY_URL",
        "https://api.metro-cc.ru/api/v1/tradecenters/",
    );
    let catalog_url = or_default(
        "METROCOLLECT_CATALOG_URL",
        "https://api.metro-cc.ru/products-api/graph",
    );
    let product_site_origin = or_default(
        "METROCOLLECT_PRODUCT_SITE_ORIGIN",
        "https://online.metro-cc.ru",
    );
    let target_cities = split_cities(&or_default(
        "METROCOLLECT_TARGET_CITIES",
        "Москва,Санкт-Петербург",
    ));
    let category_slug = or_default("METROCOLLECT_CATEGORY_SLUG", "kofe");
    let in_stock_only = parse_bool("METROCOLLECT_IN_STOCK_ONLY", "true")?;
    // Largest GraphQL Int, so one request covers the whole category.
    let page_size = parse_i64("METROCOLLECT_PAGE_SIZE", "2147483647")?;
    let request_timeout_secs = parse_u64("METROCOLLECT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "METROCOLLECT_USER_AGENT",
        "metrocollect/0.1 (+product-snapshot)",
    );
    let output_path = PathBuf::from(or_default(
        "METROCOLLECT_OUTPUT_PATH",
        "./data/collected_data.json",
    ));
    let log_level = or_default("METROCOLLECT_LOG_LEVEL", "info");

    Ok(AppConfig {
        directory_url,
        catalog_url,
        product_site_origin,
        target_cities,
        category_slug,
        in_stock_only,
        page_size,
        request_timeout_secs,
        user_agent,
        output_path,
        log_level,
    })
}

/// Splits the comma-separated city list, trimming whitespace around each
/// entry and dropping empty ones.
fn split_cities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
