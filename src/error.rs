//! Error types for scorecache.
//!
//! Uses `thiserror` for ergonomic error definitions. Every error is local to
//! a single lookup; nothing here is meant to take the process down.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for score lookups.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// The page URL has no usable host. URL entry points skip these silently.
    #[error("cannot extract a domain from '{url}': {reason}")]
    UrlParse { url: String, reason: String },

    /// Transport failure or a non-2xx, non-404 response.
    #[error("score API request failed: {message}")]
    RemoteFetch {
        status: Option<u16>,
        message: String,
    },

    /// A 2xx response whose payload cannot be used.
    #[error("invalid score API response: {0}")]
    InvalidResponse(String),

    #[error("score store error: {0}")]
    Store(#[from] StorageError),

    #[error("invalid score API configuration: {0}")]
    ClientConfig(String),
}

impl ScoreError {
    /// HTTP status attached to a remote failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteFetch { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::RemoteFetch {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Result type alias for score operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Errors raised by score record persistence.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read record for '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("failed to write record for '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("invalid store key: '{0}'")]
    InvalidKey(String),

    #[error("corrupt record for '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error("store directory error: {0}")]
    DirectoryError(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for config storage")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid setting '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
