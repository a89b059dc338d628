//! Error types for strategy resolution

use crate::resource::ResourceType;

/// Result type for strategy resolution
pub type Result<T> = std::result::Result<T, Error>;

/// Failures along the resolution path.
///
/// Each variant carries the context needed to diagnose the failure without
/// re-running the call. None are retried internally, and no fallback
/// strategy is returned on any of them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store's get-or-default call failed.
    #[error("failed to get strategy record {name} in scope {scope}")]
    Store {
        name: String,
        scope: String,
        #[source]
        source: strat_store::Error,
    },

    /// The record exists but has no entry for the requested resource type.
    #[error("strategy for resource type {resource_type} is not defined")]
    ResourceTypeUndefined { resource_type: ResourceType },

    /// The entry exists but is not well-formed tier-mapping text.
    /// Operator error in the record, not a transient condition.
    #[error("failed to decode strategy mapping for resource type {resource_type}")]
    Decode {
        resource_type: ResourceType,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded mapping has no entry for the requested tier.
    #[error("no strategy found for resource type {resource_type} and tier {tier}")]
    TierUndefined {
        resource_type: ResourceType,
        tier: String,
    },
}
