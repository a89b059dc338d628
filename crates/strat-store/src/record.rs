//! Configuration record model
//!
//! A [`ConfigRecord`] is the externally persisted structure holding, for
//! each resource type, the raw serialized text of its tier-keyed strategy
//! mapping. Records are identified by a name within a scope.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of a configuration record: a name within a scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId {
    pub name: String,
    pub scope: String,
}

impl RecordId {
    pub fn new(name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.name)
    }
}

/// An externally persisted configuration record.
///
/// `data` maps a resource type key to raw serialized tier-mapping text.
/// Keys are matched by exact string equality; no case-folding or trimming,
/// so keys differing only by case are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub name: String,
    pub scope: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl ConfigRecord {
    /// Create an empty record with the given identity.
    pub fn new(id: &RecordId) -> Self {
        Self {
            name: id.name.clone(),
            scope: id.scope.clone(),
            data: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        RecordId::new(&self.name, &self.scope)
    }

    /// Raw text stored under `key`, if any.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Insert or replace the raw text stored under `key`.
    pub fn set_entry(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        self.data.insert(key.into(), raw.into());
    }

    /// Builder-style [`set_entry`](Self::set_entry).
    pub fn with_entry(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.set_entry(key, raw);
        self
    }

    /// Content checksum in the canonical `sha256:<hex>` format.
    ///
    /// Covers identity and entries; two records with equal checksums hold
    /// the same data. Entry iteration order is stable (sorted keys).
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.name.as_bytes());
        hasher.update([0]);
        hasher.update(self.scope.as_bytes());
        hasher.update([0]);
        for (key, raw) in &self.data {
            hasher.update(key.as_bytes());
            hasher.update([0]);
            hasher.update(raw.as_bytes());
            hasher.update([0]);
        }
        format!("sha256:{:x}", hasher.finalize())
    }
}
