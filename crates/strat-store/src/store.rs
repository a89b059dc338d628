//! The record store seam

use crate::{ConfigRecord, RecordId, Result};
use async_trait::async_trait;

/// Read access to persisted configuration records.
///
/// The single operation is a composite: return the stored record for `id`
/// if one exists, otherwise persist `default` and return it. The composite
/// must be idempotent under concurrent callers — a caller never observes
/// "not found", only a consistent record snapshot or an error. Callers
/// supply a `default` carrying the same identity as `id`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_or_default(&self, id: &RecordId, default: ConfigRecord) -> Result<ConfigRecord>;
}
