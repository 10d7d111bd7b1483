//! JSON-based score record storage.
//!
//! Stores each domain's record as a separate JSON file for simplicity and
//! durability. Writes go through a temporary file and a rename so a reader
//! never sees a half-written record.

use super::ScoreStore;
use crate::error::{StorageError, StorageResult};
use crate::types::ScoreRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, warn};

/// JSON file-based score store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    records_dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `records_dir`, creating it if needed.
    pub fn new(records_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let records_dir = records_dir.into();

        fs::create_dir_all(&records_dir)
            .map_err(|e| StorageError::DirectoryError(format!("{}: {}", records_dir.display(), e)))?;

        Ok(Self { records_dir })
    }

    /// Directory holding the record files.
    pub fn records_dir(&self) -> &Path {
        &self.records_dir
    }

    /// Get the file path for a domain.
    fn record_file(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.records_dir.join(format!("{}.json", key)))
    }

    /// List all stored domain keys.
    pub async fn list_keys(&self) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut entries = async_fs::read_dir(&self.records_dir)
            .await
            .map_err(|e| StorageError::DirectoryError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::DirectoryError(e.to_string()))?
        {
            let path = entry.path();

            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    let key = stem.to_string_lossy().into_owned();
                    if validate_key(&key).is_ok() {
                        keys.push(key);
                    }
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    /// Get storage statistics.
    pub async fn stats(&self) -> StorageResult<StorageStats> {
        let records = self.list().await?;
        let mut total_size_bytes = 0;

        for (key, _) in &records {
            if let Ok(meta) = async_fs::metadata(self.record_file(key)?).await {
                total_size_bytes += meta.len();
            }
        }

        let dates = records.iter().map(|(_, r)| r.score_date);
        let oldest = dates.clone().min();
        let newest = dates.max();

        Ok(StorageStats {
            record_count: records.len(),
            scored_count: records.iter().filter(|(_, r)| r.has_score()).count(),
            total_size_bytes,
            oldest_record: oldest.and_then(DateTime::<Utc>::from_timestamp_millis),
            newest_record: newest.and_then(DateTime::<Utc>::from_timestamp_millis),
        })
    }
}

#[async_trait]
impl ScoreStore for JsonStore {
    async fn get(&self, key: &str) -> StorageResult<Option<ScoreRecord>> {
        let file = self.record_file(key)?;

        let content = match async_fs::read_to_string(&file).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn set(&self, key: &str, record: &ScoreRecord) -> StorageResult<()> {
        let file = self.record_file(key)?;
        let tmp = self.records_dir.join(format!(".{}.json.tmp", key));
        let content = serde_json::to_string_pretty(record)?;

        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };

        async_fs::write(&tmp, content).await.map_err(write_failed)?;
        async_fs::rename(&tmp, &file).await.map_err(write_failed)?;

        debug!(domain = %key, path = %file.display(), "record written");
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<(String, ScoreRecord)>> {
        let mut records = Vec::new();

        for key in self.list_keys().await? {
            match self.get(&key).await {
                Ok(Some(record)) => records.push((key, record)),
                Ok(None) => {}
                Err(e) => warn!(domain = %key, error = %e, "skipping unreadable record"),
            }
        }

        Ok(records)
    }

    async fn remove(&self, key: &str) -> StorageResult<bool> {
        let file = self.record_file(key)?;

        match async_fs::remove_file(&file).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Removes every record file, including ones that no longer parse.
    async fn clear(&self) -> StorageResult<usize> {
        let mut removed = 0;
        for key in self.list_keys().await? {
            if self.remove(&key).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Keys become file names, so only host-name characters are accepted.
fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Storage statistics.
#[derive(Debug, Clone)]
pub struct StorageStats {
    /// Number of stored records.
    pub record_count: usize,
    /// Records that carry a score.
    pub scored_count: usize,
    /// Total size in bytes.
    pub total_size_bytes: u64,
    /// Oldest record timestamp.
    pub oldest_record: Option<DateTime<Utc>>,
    /// Newest record timestamp.
    pub newest_record: Option<DateTime<Utc>>,
}
