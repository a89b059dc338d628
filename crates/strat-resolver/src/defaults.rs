//! Built-in record identity and the synthesized default record

use crate::resource::ResourceType;
use strat_store::{ConfigRecord, RecordId};

/// Record name used when a resolver is constructed without an explicit one.
pub const DEFAULT_RECORD_NAME: &str = "cloud-resources-strategies";

/// Scope used when neither an explicit scope nor [`watch_scope`] output is
/// supplied.
pub const DEFAULT_SCOPE: &str = "cloud-resources";

/// Environment variable naming the scope this process manages.
pub const WATCH_SCOPE_ENV: &str = "STRAT_WATCH_SCOPE";

/// Entry text seeded for every well-known resource type: placeholder
/// development and production tiers with empty strategy payloads.
const DEFAULT_TIER_MAPPING: &str =
    r#"{"development": { "strategy": {} }, "production": { "strategy": {} } }"#;

/// Resolve the watched scope from the environment.
///
/// A one-time bootstrap step for callers wiring a resolver: read the value
/// at process start and pass it to
/// [`StrategyResolver::with_record`](crate::StrategyResolver::with_record).
/// The resolver itself never consults the environment.
pub fn watch_scope() -> Option<String> {
    std::env::var(WATCH_SCOPE_ENV)
        .ok()
        .filter(|scope| !scope.is_empty())
}

/// Build the record synthesized when none exists yet.
///
/// Every well-known resource type maps to placeholder development and
/// production tiers with empty payloads. The empty payloads make record
/// creation succeed without choosing real strategies for anyone; lookups
/// against them resolve to an empty strategy.
pub fn default_strategy_record(id: &RecordId) -> ConfigRecord {
    let mut record = ConfigRecord::new(id);
    for resource_type in [
        ResourceType::postgres(),
        ResourceType::redis(),
        ResourceType::blob_storage(),
    ] {
        record.set_entry(resource_type.as_str(), DEFAULT_TIER_MAPPING);
    }
    record
}
