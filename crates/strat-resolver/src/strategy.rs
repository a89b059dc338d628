//! Strategy configuration and the tier-keyed mapping codec

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A resolved provisioning strategy: the opaque payload selected for one
/// (resource type, tier) pair.
///
/// The payload is never interpreted here. Its real shape depends on the
/// resource type; callers decode it with
/// [`decode_strategy`](Self::decode_strategy) once they know what they are
/// provisioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Raw strategy payload, passed through untouched. Decodes to `null`
    /// when the serialized entry omits the field.
    #[serde(default)]
    pub strategy: Value,
}

impl StrategyConfig {
    pub fn new(strategy: Value) -> Self {
        Self { strategy }
    }

    /// Strategy with an empty `{}` payload, the shape seeded into
    /// synthesized default records.
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }

    /// Decode the opaque payload into a caller-chosen shape.
    pub fn decode_strategy<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.strategy.clone())
    }
}

/// Mapping from tier to strategy, decoded from one record entry.
///
/// A tier key may be present with a JSON `null` entry; that decodes to
/// `None` and is treated the same as an absent tier by the resolver.
pub type TierMapping = HashMap<String, Option<StrategyConfig>>;

/// Decode a record entry's raw text into a [`TierMapping`].
pub fn decode_tier_mapping(raw: &str) -> serde_json::Result<TierMapping> {
    serde_json::from_str(raw)
}

/// Encode a [`TierMapping`] back into record entry text.
pub fn encode_tier_mapping(mapping: &TierMapping) -> serde_json::Result<String> {
    serde_json::to_string(mapping)
}
