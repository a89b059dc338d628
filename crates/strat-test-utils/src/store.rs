//! Store fixtures for resolver tests

use async_trait::async_trait;
use strat_store::{ConfigRecord, Error, MemoryStore, RecordId, RecordStore, Result};

/// Build a [`MemoryStore`] pre-seeded with one record carrying the given
/// (resource type, raw tier-mapping text) entries.
pub async fn seeded_store(id: &RecordId, entries: &[(&str, &str)]) -> MemoryStore {
    let mut record = ConfigRecord::new(id);
    for (resource_type, raw) in entries {
        record.set_entry(*resource_type, *raw);
    }
    let store = MemoryStore::new();
    store.insert(record).await;
    store
}

/// Store double whose get-or-default always fails, for exercising
/// store-access error paths.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn get_or_default(&self, id: &RecordId, _default: ConfigRecord) -> Result<ConfigRecord> {
        Err(Error::io(
            id.to_string(),
            std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "backing store unavailable",
            ),
        ))
    }
}
