//! Client configuration for the RAWG API
//!
//! The configuration is built once (from the environment or from CLI flags)
//! and handed to [`RawgClient::new`](crate::api::RawgClient::new).

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_VAR: &str = "RAWG_API_KEY";
pub const BASE_URL_VAR: &str = "RAWG_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct RawgConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl RawgConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a config against a custom endpoint (mirrors, mock servers)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `RAWG_API_KEY` and optionally `RAWG_BASE_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_or(None, None)
    }

    /// Like [`from_env`](Self::from_env), but explicit values win over the environment
    pub fn from_env_or(
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = match api_key {
            Some(key) => key,
            None => {
                let key = std::env::var(API_KEY_VAR).unwrap_or_default();
                if key.is_empty() {
                    log::warn!("{} environment variable not set", API_KEY_VAR);
                } else {
                    log::info!("{} environment variable found", API_KEY_VAR);
                }
                key
            }
        };
        let base_url = base_url
            .or_else(|| std::env::var(BASE_URL_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(api_key, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_base_url() {
        let config = RawgConfig::new("abc").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            RawgConfig::new("   "),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = RawgConfig::with_base_url("abc", "http://localhost:8080/api/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_base_url_without_scheme_rejected() {
        let err = RawgConfig::with_base_url("abc", "api.rawg.io").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(url) if url == "api.rawg.io"));
    }

    #[test]
    fn test_timeout_override() {
        let config = RawgConfig::new("abc")
            .unwrap()
            .timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    // the only test that touches RAWG_* variables
    #[test]
    fn test_from_env_and_overrides() {
        std::env::set_var(API_KEY_VAR, "env-key");
        std::env::set_var(BASE_URL_VAR, "http://localhost:9000/api/");

        let config = RawgConfig::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "http://localhost:9000/api");

        let config = RawgConfig::from_env_or(Some("flag-key".to_string()), None).unwrap();
        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.base_url, "http://localhost:9000/api");

        let config =
            RawgConfig::from_env_or(None, Some("https://mirror.example/api".to_string())).unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "https://mirror.example/api");

        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(BASE_URL_VAR);

        assert!(matches!(
            RawgConfig::from_env(),
            Err(ConfigError::MissingApiKey)
        ));
        let config = RawgConfig::from_env_or(Some("flag-key".to_string()), None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
