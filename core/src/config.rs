//! Where the book API lives.
//!
//! The endpoint is passed into `RecordApi` explicitly; nothing in the crate
//! reads a global base URL.

use thiserror::Error;

use crate::api::RecordApi;
use crate::transport::UreqTransport;

pub const BASE_URL_ENV: &str = "BOOKSHELF_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Errors raised while building a `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': must start with http:// or https://")]
    InvalidBaseUrl { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads `BOOKSHELF_API_URL`, falling back to `http://localhost:3000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.as_str();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.trim_matches('/').is_empty());
        if has_host {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
            })
        }
    }

    pub fn connect(&self) -> RecordApi<UreqTransport> {
        RecordApi::connect(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_dev_server() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:3000");
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(ClientConfig::new("http://127.0.0.1:8080").is_ok());
        assert!(ClientConfig::new("https://books.example.com/api/").is_ok());
    }

    #[test]
    fn rejects_non_http_urls() {
        for url in ["", "localhost:3000", "ftp://example.com", "http://", "https:///"] {
            let err = ClientConfig::new(url).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }), "{url}");
        }
    }

    #[test]
    fn connect_uses_configured_base_url() {
        let api = ClientConfig::new("http://books.local/").unwrap().connect();
        assert_eq!(api.client().base_url(), "http://books.local");
    }
}
