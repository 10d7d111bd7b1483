//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and cached records.

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{ConfigError, ConfigResult};
use crate::freshness::{
    FreshnessPolicy, DEFAULT_LAST_SCORE_EXPIRATION_DAYS, DEFAULT_NO_SCORE_EXPIRATION_DAYS,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/scorecache)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/scorecache)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn resolve() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "scorecache", "scorecache")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Paths rooted under a single directory.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the path to the score record directory.
    pub fn records_dir(&self) -> PathBuf {
        self.data_dir.join("records")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scoring API origin.
    #[serde(alias = "baseURL", alias = "baseUrl")]
    pub base_url: String,
    /// Days a scored record stays usable.
    #[serde(alias = "lastScoreExpirationDays")]
    pub last_score_expiration_days: u32,
    /// Days a "no score" record stays usable.
    #[serde(alias = "noScoreExpirationDays")]
    pub no_score_expiration_days: u32,
    /// HTTP request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Maximum API requests per second, 0 for unlimited.
    pub rate_limit: u32,
    /// Concurrent lookups for batch commands.
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            last_score_expiration_days: DEFAULT_LAST_SCORE_EXPIRATION_DAYS,
            no_score_expiration_days: DEFAULT_NO_SCORE_EXPIRATION_DAYS,
            request_timeout_ms: 10_000,
            rate_limit: 0,
            concurrency: 8,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    /// when no settings file exists.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Check values that cannot be expressed in the types.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "concurrency",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Expiry windows for the cache.
    pub fn policy(&self) -> FreshnessPolicy {
        FreshnessPolicy::new(self.last_score_expiration_days, self.no_score_expiration_days)
    }

    /// Connection settings for the API client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_millis(self.request_timeout_ms))
            .with_rate_limit(self.rate_limit)
    }
}
