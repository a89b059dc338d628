//! Concurrent resolution behavior
//!
//! The resolver holds no mutable state, so concurrent calls are
//! independent reads. These tests drive it from many tasks at once against
//! both stores and check for cross-contamination and creation races.

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use strat_resolver::{
    ResourceType, StrategyConfig, StrategyManager, StrategyResolver, TierMapping,
    default_strategy_record, encode_tier_mapping,
};
use strat_store::{ConfigRecord, FileStore, MemoryStore, RecordId};
use tempfile::TempDir;

const RESOURCE_TYPES: [&str; 3] = ["postgres", "redis", "blobstorage"];
const TIERS: [&str; 2] = ["development", "production"];

fn record_id() -> RecordId {
    RecordId::new("cloud-resources-strategies", "test-scope")
}

/// Record whose every (resource type, tier) strategy names its own pair,
/// so a cross-contaminated result is detectable.
fn tagged_record(id: &RecordId) -> ConfigRecord {
    let mut record = ConfigRecord::new(id);
    for resource_type in RESOURCE_TYPES {
        let mut mapping = TierMapping::new();
        for tier in TIERS {
            mapping.insert(
                tier.to_string(),
                Some(StrategyConfig::new(
                    json!({"applies_to": format!("{resource_type}/{tier}")}),
                )),
            );
        }
        record.set_entry(resource_type, encode_tier_mapping(&mapping).unwrap());
    }
    record
}

fn resolver(store: Arc<dyn strat_store::RecordStore>) -> Arc<StrategyResolver> {
    Arc::new(StrategyResolver::with_record(
        "cloud-resources-strategies",
        "test-scope",
        store,
    ))
}

#[tokio::test(flavor = "multi_thread")]
async fn distinct_pairs_resolve_independently() {
    let store = MemoryStore::new();
    store.insert(tagged_record(&record_id())).await;
    let resolver = resolver(Arc::new(store));

    let mut handles = Vec::new();
    for resource_type in RESOURCE_TYPES {
        for tier in TIERS {
            let resolver = resolver.clone();
            handles.push(tokio::spawn(async move {
                let strategy = resolver
                    .read_storage_strategy(&ResourceType::new(resource_type), tier)
                    .await
                    .unwrap();
                (resource_type, tier, strategy)
            }));
        }
    }

    for handle in handles {
        let (resource_type, tier, strategy) = handle.await.unwrap();
        assert_eq!(
            strategy,
            StrategyConfig::new(json!({"applies_to": format!("{resource_type}/{tier}")})),
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn identical_pairs_resolve_independently() {
    let store = MemoryStore::new();
    store.insert(tagged_record(&record_id())).await;
    let resolver = resolver(Arc::new(store));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                resolver
                    .read_storage_strategy(&ResourceType::postgres(), "production")
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.await.unwrap(),
            StrategyConfig::new(json!({"applies_to": "postgres/production"})),
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creation_converges_on_one_record() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(temp.path()));
    let resolver = resolver(store.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                resolver
                    .read_storage_strategy(&ResourceType::postgres(), "development")
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StrategyConfig::empty());
    }

    let stored = store.load(&record_id()).unwrap().unwrap();
    assert_eq!(
        stored.checksum(),
        default_strategy_record(&record_id()).checksum()
    );
}
