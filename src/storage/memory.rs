//! In-memory score store.

use super::ScoreStore;
use crate::error::StorageResult;
use crate::types::ScoreRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Score store backed by a `HashMap`. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, ScoreRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<ScoreRecord>> {
        Ok(self.records.read().await.get(key).copied())
    }

    async fn set(&self, key: &str, record: &ScoreRecord) -> StorageResult<()> {
        self.records.write().await.insert(key.to_string(), *record);
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<(String, ScoreRecord)>> {
        let mut records: Vec<_> = self
            .records
            .read()
            .await
            .iter()
            .map(|(key, record)| (key.clone(), *record))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(records)
    }

    async fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self.records.write().await.remove(key).is_some())
    }

    async fn clear(&self) -> StorageResult<usize> {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Score;

    #[tokio::test]
    async fn test_roundtrip() {
        let store = MemoryStore::new();
        let record = ScoreRecord::scored(Score::new(640).unwrap(), Score::new(600), 123);

        assert!(store.get("example.com").await.unwrap().is_none());
        store.set("example.com", &record).await.unwrap();
        assert_eq!(store.get("example.com").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("a.com", &ScoreRecord::not_found(1)).await.unwrap();
        store.set("a.com", &ScoreRecord::not_found(2)).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("a.com").await.unwrap().unwrap().score_date, 2);
    }

    #[tokio::test]
    async fn test_list_remove_clear() {
        let store = MemoryStore::new();
        store.set("b.com", &ScoreRecord::not_found(1)).await.unwrap();
        store.set("a.com", &ScoreRecord::not_found(1)).await.unwrap();

        let keys: Vec<_> = store.list().await.unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a.com", "b.com"]);

        assert!(store.remove("a.com").await.unwrap());
        assert!(!store.remove("a.com").await.unwrap());
        assert_eq!(store.clear().await.unwrap(), 1);
        assert!(store.is_empty().await);
    }
}
