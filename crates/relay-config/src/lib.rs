//! Runtime configuration for the Retell relay.
//!
//! All configuration comes from the process environment, read once at
//! startup:
//!
//! - [`Config`] — listen port, upstream credential and endpoint, default
//!   agent, CORS policy
//! - [`CorsPolicy`] — explicit origin allow-list or permit-all
//! - [`ConfigError`] — environment parsing failures
//!
//! # Example
//!
//! ```rust
//! use relay_config::CorsPolicy;
//!
//! let policy: CorsPolicy = "http://localhost:3000,http://localhost:5173".parse().unwrap();
//! assert!(matches!(policy, CorsPolicy::AllowList(origins) if origins.len() == 2));
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;

/// Upstream API base when `RETELL_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "https://api.retellai.com";

/// Agent used when the caller does not supply an `agent_id`.
pub const DEFAULT_AGENT_ID: &str = "agent_5dd51015619e030d2022ab251e";

/// Browser origins permitted by default.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://retell-wordpress.vercel.app",
    "http://localhost:3000",
    "http://localhost:5173",
];

/// Errors that can occur when reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// `CORS_ALLOWED_ORIGINS` was set but contained no usable origins.
    #[error("CORS_ALLOWED_ORIGINS is set but empty")]
    EmptyOrigins,
}

/// Cross-origin policy for the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Only the listed origins are permitted.
    AllowList(Vec<String>),
    /// Every requesting origin is permitted.
    Any,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        CorsPolicy::AllowList(
            DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        )
    }
}

impl FromStr for CorsPolicy {
    type Err = ConfigError;

    /// Parses a comma-separated origin list; `*` selects [`CorsPolicy::Any`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "*" {
            return Ok(CorsPolicy::Any);
        }
        let origins: Vec<String> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            return Err(ConfigError::EmptyOrigins);
        }
        Ok(CorsPolicy::AllowList(origins))
    }
}

/// Relay configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port for the HTTP server.
    pub port: u16,
    /// Bearer credential for the upstream API. May be empty; the health
    /// endpoint reports presence and upstream calls are left to fail.
    pub api_key: String,
    /// Base URL of the upstream API.
    pub api_base: String,
    /// Agent injected when the caller omits `agent_id`.
    pub default_agent_id: String,
    /// Cross-origin policy applied to every route.
    pub cors: CorsPolicy,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; malformed values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };
        let cors = match std::env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => value.parse()?,
            Err(_) => CorsPolicy::default(),
        };
        Ok(Config {
            port,
            api_key: std::env::var("RETELL_API_KEY").unwrap_or_default(),
            api_base: std::env::var("RETELL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            default_agent_id: std::env::var("RETELL_DEFAULT_AGENT_ID")
                .unwrap_or_else(|_| DEFAULT_AGENT_ID.to_string()),
            cors,
        })
    }

    /// Whether a non-empty upstream credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidPort {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_wildcard_parses_to_any() {
        let policy: CorsPolicy = "*".parse().unwrap();
        assert_eq!(policy, CorsPolicy::Any);
    }

    #[test]
    fn cors_list_splits_and_trims() {
        let policy: CorsPolicy = " http://localhost:3000 , https://example.com ".parse().unwrap();
        assert_eq!(
            policy,
            CorsPolicy::AllowList(vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string(),
            ])
        );
    }

    #[test]
    fn cors_empty_value_is_an_error() {
        let err = " , ".parse::<CorsPolicy>().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyOrigins));
    }

    #[test]
    fn default_policy_is_the_allow_list() {
        match CorsPolicy::default() {
            CorsPolicy::AllowList(origins) => {
                assert_eq!(origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
                assert!(origins.contains(&"http://localhost:5173".to_string()));
            }
            CorsPolicy::Any => panic!("default policy must be an allow-list"),
        }
    }

    #[test]
    fn port_parsing_rejects_garbage() {
        assert_eq!(parse_port("3001").unwrap(), 3001);
        assert!(matches!(
            parse_port("not-a-port"),
            Err(ConfigError::InvalidPort { .. })
        ));
    }
}
