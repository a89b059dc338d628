//! Strategy resolution against a configuration record

use crate::defaults::{DEFAULT_RECORD_NAME, DEFAULT_SCOPE, default_strategy_record};
use crate::error::{Error, Result};
use crate::resource::ResourceType;
use crate::strategy::{StrategyConfig, decode_tier_mapping};
use async_trait::async_trait;
use std::sync::Arc;
use strat_store::{RecordId, RecordStore};

/// Read access to resolved provisioning strategies.
///
/// The seam consumed by provisioning logic; implemented by
/// [`StrategyResolver`] and by test doubles.
#[async_trait]
pub trait StrategyManager: Send + Sync {
    async fn read_storage_strategy(
        &self,
        resource_type: &ResourceType,
        tier: &str,
    ) -> Result<StrategyConfig>;
}

/// Resolves tiered provisioning strategies from one configuration record.
///
/// Stateless between calls: every resolution re-reads the record through
/// the store's get-or-default operation, decodes the entry for the
/// requested resource type, and selects the requested tier. Holds only the
/// record identity and the store handle, so it is safe to share across
/// concurrent callers; identical concurrent calls perform independent
/// reads with no deduplication.
pub struct StrategyResolver {
    record: RecordId,
    store: Arc<dyn RecordStore>,
}

impl StrategyResolver {
    /// Resolver reading the workspace-default record identity.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_record(DEFAULT_RECORD_NAME, DEFAULT_SCOPE, store)
    }

    /// Resolver reading an explicit (name, scope) record.
    ///
    /// Callers deriving the scope from the environment should do so once at
    /// startup (see [`watch_scope`](crate::defaults::watch_scope)) and pass
    /// the result here.
    pub fn with_record(
        name: impl Into<String>,
        scope: impl Into<String>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            record: RecordId::new(name, scope),
            store,
        }
    }

    /// Identity of the record this resolver reads.
    pub fn record(&self) -> &RecordId {
        &self.record
    }
}

#[async_trait]
impl StrategyManager for StrategyResolver {
    async fn read_storage_strategy(
        &self,
        resource_type: &ResourceType,
        tier: &str,
    ) -> Result<StrategyConfig> {
        tracing::debug!(record = %self.record, %resource_type, tier, "resolving strategy");

        let record = self
            .store
            .get_or_default(&self.record, default_strategy_record(&self.record))
            .await
            .map_err(|source| Error::Store {
                name: self.record.name.clone(),
                scope: self.record.scope.clone(),
                source,
            })?;

        // An empty entry counts as undefined, same as a missing one.
        let raw = match record.entry(resource_type.as_str()) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                return Err(Error::ResourceTypeUndefined {
                    resource_type: resource_type.clone(),
                });
            }
        };

        let mut tiers = decode_tier_mapping(raw).map_err(|source| Error::Decode {
            resource_type: resource_type.clone(),
            source,
        })?;

        // Present-but-null tier entries count as undefined.
        match tiers.remove(tier) {
            Some(Some(strategy)) => Ok(strategy),
            _ => Err(Error::TierUndefined {
                resource_type: resource_type.clone(),
                tier: tier.to_string(),
            }),
        }
    }
}
