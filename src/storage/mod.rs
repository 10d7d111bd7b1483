//! Score record persistence.
//!
//! The `ScoreStore` trait is the boundary between the cache and whatever
//! keeps records around. `JsonStore` writes one JSON file per domain;
//! `MemoryStore` keeps everything in a map.

mod json_store;
mod memory;

pub use json_store::{JsonStore, StorageStats};
pub use memory::MemoryStore;

use crate::error::StorageResult;
use crate::types::ScoreRecord;
use async_trait::async_trait;

/// Asynchronous key-value store of score records keyed by domain.
///
/// The lookup path only ever calls `get` and `set`. The remaining methods
/// exist for maintenance commands.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Read the record for `key`, if one exists.
    async fn get(&self, key: &str) -> StorageResult<Option<ScoreRecord>>;

    /// Write `record` under `key`, replacing any previous record.
    async fn set(&self, key: &str, record: &ScoreRecord) -> StorageResult<()>;

    /// All stored records, sorted by key.
    async fn list(&self) -> StorageResult<Vec<(String, ScoreRecord)>>;

    /// Remove the record for `key`. Returns whether one existed.
    async fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Remove every record. Returns the number removed.
    async fn clear(&self) -> StorageResult<usize> {
        let mut removed = 0;
        for (key, _) in self.list().await? {
            if self.remove(&key).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
