//! Resource type and tier vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier seeded into synthesized default records.
pub const TIER_DEVELOPMENT: &str = "development";
/// Tier seeded into synthesized default records.
pub const TIER_PRODUCTION: &str = "production";

/// The kind of resource being provisioned.
///
/// An open, string-backed identifier: the well-known kinds get
/// constructors, but any value is a valid lookup key. Matching is by exact
/// string equality — no case-folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Managed relational database.
    pub fn postgres() -> Self {
        Self::new("postgres")
    }

    /// Managed in-memory cache.
    pub fn redis() -> Self {
        Self::new("redis")
    }

    /// Managed object store.
    pub fn blob_storage() -> Self {
        Self::new("blobstorage")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ResourceType {
    fn from(name: String) -> Self {
        Self(name)
    }
}
