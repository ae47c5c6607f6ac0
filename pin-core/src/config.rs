//! Client configuration management.
//!
//! Handles loading, saving, and accessing client configuration including
//! the API base URL, access token, and timeouts. Configuration is persisted
//! as TOML on disk and can also be assembled from environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{Error, Result};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL, scheme + host with no version prefix
    /// (e.g. "https://api.pinterest.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// REST API version prefix (e.g. "v1"). Used both when building request
    /// URLs and when reconstructing requests from continuation URLs.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// OAuth access token appended to every request. Token acquisition is
    /// out of scope; this value is supplied ready to use.
    #[serde(default)]
    pub access_token: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Whether to accept invalid TLS certificates (local proxies only).
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            access_token: String::new(),
            timeout_ms: default_timeout(),
            accept_invalid_certs: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, file logging is disabled.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    constants::API_VERSION.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Default configuration file location under the platform config dir.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory on this platform".into()))?;
        Ok(base.join(constants::CLIENT_NAME).join("config.toml"))
    }

    /// Build a configuration from environment variables, falling back to
    /// defaults. Recognized: `PINBOARD_BASE_URL`, `PINBOARD_ACCESS_TOKEN`,
    /// `PINBOARD_TIMEOUT_MS`, `PINBOARD_LOG_LEVEL`.
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();
        if let Ok(url) = std::env::var("PINBOARD_BASE_URL") {
            config.api.base_url = ApiConfig::sanitize_base_url(&url);
        }
        if let Ok(token) = std::env::var("PINBOARD_ACCESS_TOKEN") {
            config.api.access_token = token;
        }
        if let Ok(timeout) = std::env::var("PINBOARD_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                config.api.timeout_ms = ms;
            }
        }
        if let Ok(level) = std::env::var("PINBOARD_LOG_LEVEL") {
            config.logging.level = level;
        }
        config
    }
}

impl ApiConfig {
    /// Normalize a user-supplied base URL: trim whitespace, drop trailing
    /// slashes, and drop an accidentally-included version suffix.
    pub fn sanitize_base_url(url: &str) -> String {
        let mut s = url.trim().trim_end_matches('/').to_string();
        let version_suffix = format!("/{}", constants::API_VERSION);
        if s.ends_with(&version_suffix) {
            s.truncate(s.len() - version_suffix.len());
        }
        s
    }

    /// Validate that the configuration is complete enough to make calls.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::MissingConfig("base_url".into()));
        }
        if self.access_token.trim().is_empty() {
            return Err(Error::MissingConfig("access_token".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(config.api.api_version, "v1");
        assert_eq!(config.api.timeout_ms, constants::DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            ApiConfig::sanitize_base_url("https://api.example.com/"),
            "https://api.example.com"
        );
        assert_eq!(
            ApiConfig::sanitize_base_url("  https://api.example.com/v1  "),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_validate_requires_token() {
        let mut api = ApiConfig::default();
        assert!(matches!(api.validate(), Err(Error::MissingConfig(_))));
        api.access_token = "token".into();
        assert!(api.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.api.access_token = "secret".into();
        config.logging.level = "debug".into();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.api.access_token, "secret");
        assert_eq!(loaded.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
