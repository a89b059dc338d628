//! In-memory record store

use crate::{ConfigRecord, RecordId, RecordStore, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`RecordStore`] backed by a map.
///
/// Get-or-create runs under the write lock, so concurrent callers racing
/// on a missing record all converge on the same stored snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, ConfigRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, returning the previous one if any.
    pub async fn insert(&self, record: ConfigRecord) -> Option<ConfigRecord> {
        self.records.write().await.insert(record.id(), record)
    }

    /// Fetch a record snapshot without creating anything.
    pub async fn get(&self, id: &RecordId) -> Option<ConfigRecord> {
        self.records.read().await.get(id).cloned()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_or_default(&self, id: &RecordId, default: ConfigRecord) -> Result<ConfigRecord> {
        let mut records = self.records.write().await;
        Ok(records.entry(id.clone()).or_insert(default).clone())
    }
}
