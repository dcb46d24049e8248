//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid {var}: {value:?} is not a valid number")]
    InvalidNumber { var: &'static str, value: String },

    /// `BACKEND_URL` is not an http(s) URL.
    #[error("invalid BACKEND_URL: {0:?} must start with http:// or https://")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend origin without a trailing `/`.
    pub backend_url: String,
    pub backend_timeout: Duration,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// Blank values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_number("PORT", get("PORT"), DEFAULT_PORT)?;
        let backend_timeout_secs = parse_number("BACKEND_TIMEOUT_SECS", get("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?;
        let backend_url = get("BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }

        Ok(Self { port, backend_url, backend_timeout: Duration::from_secs(backend_timeout_secs) })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
