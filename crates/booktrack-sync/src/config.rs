//! # Client Configuration
//!
//! Configuration management for the books client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BOOKTRACK_API_URL=https://books.example.com                        │
//! │     BOOKTRACK_TIMEOUT_SECS=30                                          │
//! │     BOOKTRACK_CREDENTIAL_PATH=/tmp/credentials.json                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/booktrack/client.toml (Linux)                            │
//! │     ~/Library/Application Support/app.booktrack.booktrack/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Production API, no request timeout, platform data dir              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # client.toml
//! [api]
//! base_url = "https://backendbooktrack-production.up.railway.app"
//! request_timeout_secs = 30   # optional; unset means wait indefinitely
//!
//! [storage]
//! credential_path = "/home/me/.local/share/booktrack/credentials.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{SyncError, SyncResult};

/// Production books API origin.
pub const DEFAULT_API_URL: &str = "https://backendbooktrack-production.up.railway.app";

// =============================================================================
// API Settings
// =============================================================================

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Origin all API paths are relative to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds). `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the credential store keeps its file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Credential file path. Defaults to the platform data directory.
    #[serde(default)]
    pub credential_path: Option<PathBuf>,
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (client.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SyncResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| SyncError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SyncResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SyncError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SyncError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| SyncError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SyncResult<()> {
        let url = Url::parse(&self.api.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SyncError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.request_timeout_secs == Some(0) {
            return Err(SyncError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("BOOKTRACK_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Ok(secs) = std::env::var("BOOKTRACK_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.request_timeout_secs = Some(s),
                Err(_) => warn!(value = %secs, "Ignoring non-numeric BOOKTRACK_TIMEOUT_SECS"),
            }
        }

        if let Ok(path) = std::env::var("BOOKTRACK_CREDENTIAL_PATH") {
            self.storage.credential_path = Some(PathBuf::from(path));
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("app", "booktrack", "booktrack")
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("client.toml"))
    }

    /// Credential file path: configured, or the platform data directory.
    pub fn credential_path(&self) -> Option<PathBuf> {
        self.storage.credential_path.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join("credentials.json"))
        })
    }

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert!(config.api.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        config.api.base_url = "ftp://books.example.com".to_string();
        assert!(config.validate().unwrap_err().is_config_error());

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "http://127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());

        config.api.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"http://localhost:3000\"\nrequest_timeout_secs = 15\n",
        )
        .unwrap();

        let config = ClientConfig::load(Some(path)).unwrap();
        // Env vars may be set by the developer; only assert when they are not
        if std::env::var("BOOKTRACK_API_URL").is_err() {
            assert_eq!(config.base_url(), "http://localhost:3000");
        }
        if std::env::var("BOOKTRACK_TIMEOUT_SECS").is_err() {
            assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(15)));
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("client.toml");

        let mut config = ClientConfig::default();
        config.storage.credential_path = Some(dir.path().join("creds.json"));
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[api]"));
        assert!(contents.contains("[storage]"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_or_default(Some(dir.path().join("absent.toml")));
        assert!(config.validate().is_ok());
    }
}
