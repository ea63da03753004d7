use crate::app_config::{AppConfig, Environment, HostConfig};
use crate::ConfigError;

/// Boundary fetches give up after this many seconds unless overridden.
pub const DEFAULT_BOUNDARY_TIMEOUT_SECS: u64 = 15;

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
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
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

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
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

    let boundary_url = require("REPMAP_BOUNDARY_URL")?;
    if !(boundary_url.starts_with("http://") || boundary_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "REPMAP_BOUNDARY_URL".to_string(),
            reason: "must be an absolute http(s) URL".to_string(),
        });
    }

    let env = parse_environment(&or_default("REPMAP_ENV", "development"))?;
    let bind_addr = parse_addr("REPMAP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("REPMAP_LOG_LEVEL", "info");
    let payload_path = optional("REPMAP_PAYLOAD_PATH").map(PathBuf::from);

    let boundary_timeout_secs = parse_u64(
        "REPMAP_BOUNDARY_TIMEOUT_SECS",
        &DEFAULT_BOUNDARY_TIMEOUT_SECS.to_string(),
    )?;
    if boundary_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "REPMAP_BOUNDARY_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("REPMAP_USER_AGENT", "repmap/0.1 (representatives-map)");

    let is_admin = parse_bool("REPMAP_IS_ADMIN", &or_default("REPMAP_IS_ADMIN", "false"))?;
    let session_token = optional("REPMAP_SESSID");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        payload_path,
        boundary_url,
        boundary_timeout_secs,
        user_agent,
        host: HostConfig {
            is_admin,
            session_token,
        },
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "REPMAP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
