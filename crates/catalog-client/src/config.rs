//! # Client Configuration
//!
//! Where the backend lives and how long to wait for it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CATALOG_API_URL=https://catalog.example.com                        │
//! │     CATALOG_TIMEOUT_SECS=30                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/catalog/catalog.toml (Linux)                             │
//! │     ~/Library/Application Support/com.catalog.catalog/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3003, 10 second timeout                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [api]
//! url = "https://catalog.example.com"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding [`ApiSettings::url`].
pub const ENV_API_URL: &str = "CATALOG_API_URL";

/// Environment variable overriding [`ApiSettings::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";

const CONFIG_FILE_NAME: &str = "catalog.toml";

// =============================================================================
// API Settings
// =============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the product backend, without the `/products` suffix.
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3003".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            url: default_api_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

impl ClientConfig {
    /// Config pointing at `url` with default settings otherwise.
    pub fn with_api_url(url: impl Into<String>) -> Self {
        ClientConfig {
            api: ApiSettings {
                url: url.into(),
                ..ApiSettings::default()
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or the platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file, returning the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::InvalidValue("config path".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, toml::to_string_pretty(self)?)?;

        info!(?path, "Client config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = self.api.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(self.api.url.clone()));
        }
        url::Url::parse(url).map_err(|_| ConfigError::InvalidApiUrl(self.api.url.clone()))?;

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(ENV_TIMEOUT_SECS.to_string()));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`ClientConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.url = url;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_TIMEOUT_SECS.to_string()))?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "catalog", "catalog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}
