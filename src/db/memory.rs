use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::model::*;
use super::repo::*;

/// Non-durable store, used when no database is configured and in tests.
#[derive(Default, Clone)]
pub struct MemoryRepository {
    entries: Arc<RwLock<HashMap<String, KvEntry>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvRepo for MemoryRepository {
    async fn get_value(&self, key: &str) -> DbResult<KvEntry> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("Key not found: {}", key)))
    }

    async fn put_value(&self, key: &str, value: &str) -> DbResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            KvEntry {
                key: key.to_string(),
                value: value.to_string(),
                updated: Some(Utc::now()),
            },
        );
        Ok(())
    }
}
