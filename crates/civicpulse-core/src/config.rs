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

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
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

    let aggregator_url = require("CIVICPULSE_AGGREGATOR_URL")?;
    let env = parse_environment(&or_default("CIVICPULSE_ENV", "development"));
    let bind_addr = parse_addr("CIVICPULSE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CIVICPULSE_LOG_LEVEL", "info");
    let fetch_timeout_secs = parse_u64("CIVICPULSE_FETCH_TIMEOUT_SECS", "25")?;
    let fetch_limit = parse_u32("CIVICPULSE_FETCH_LIMIT", "25")?;
    let default_query = or_default("CIVICPULSE_DEFAULT_QUERY", "Tamil Nadu politics");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        aggregator_url,
        fetch_timeout_secs,
        fetch_limit,
        default_query,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("CIVICPULSE_AGGREGATOR_URL", "http://localhost:8787");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_aggregator_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CIVICPULSE_AGGREGATOR_URL"),
            "expected MissingEnvVar(CIVICPULSE_AGGREGATOR_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("CIVICPULSE_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIVICPULSE_BIND_ADDR"),
            "expected InvalidEnvVar(CIVICPULSE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.aggregator_url, "http://localhost:8787");
        assert_eq!(cfg.fetch_timeout_secs, 25);
        assert_eq!(cfg.fetch_limit, 25);
        assert_eq!(cfg.default_query, "Tamil Nadu politics");
    }

    #[test]
    fn fetch_timeout_override() {
        let mut map = full_env();
        map.insert("CIVICPULSE_FETCH_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_timeout_secs, 60);
    }

    #[test]
    fn fetch_timeout_invalid() {
        let mut map = full_env();
        map.insert("CIVICPULSE_FETCH_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIVICPULSE_FETCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CIVICPULSE_FETCH_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn fetch_limit_override() {
        let mut map = full_env();
        map.insert("CIVICPULSE_FETCH_LIMIT", "50");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_limit, 50);
    }

    #[test]
    fn default_query_override() {
        let mut map = full_env();
        map.insert("CIVICPULSE_DEFAULT_QUERY", "water crisis");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.default_query, "water crisis");
    }
}
