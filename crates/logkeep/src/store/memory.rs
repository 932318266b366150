//! In-memory log store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StorageResult;
use super::logs::{LogCollection, LogStore};

/// `LogStore` that keeps the collection in process memory.
///
/// Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    logs: Arc<RwLock<LogCollection>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `logs`.
    pub fn with_logs(logs: LogCollection) -> Self {
        Self {
            logs: Arc::new(RwLock::new(logs)),
        }
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn load(&self) -> LogCollection {
        self.logs.read().await.clone()
    }

    async fn save(&self, logs: &LogCollection) -> StorageResult<()> {
        *self.logs.write().await = logs.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryLogStore::new();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_replaces_everything() {
        let store = MemoryLogStore::with_logs(LogCollection::from(vec![json!(1), json!(2)]));

        store
            .save(&LogCollection::from(vec![json!({"id": 3})]))
            .await
            .unwrap();

        assert_eq!(store.load().await.records(), &[json!({"id": 3})]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryLogStore::new();
        let other = store.clone();

        other
            .save(&LogCollection::from(vec![json!("shared")]))
            .await
            .unwrap();

        assert_eq!(store.load().await.len(), 1);
    }
}
