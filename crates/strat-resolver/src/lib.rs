//! Tiered provisioning-strategy resolution
//!
//! Given a resource type (postgres, redis, blob storage, ...) and a
//! deployment tier (development, production, ...), resolve the strategy to
//! provision that resource with, by reading a centrally-managed
//! configuration record:
//!
//! ```text
//!          provisioning logic
//!                  |
//!          StrategyResolver          (this crate)
//!                  |
//!            RecordStore             (strat-store)
//! ```
//!
//! Each record entry is keyed by resource type and holds serialized text
//! mapping tiers to strategies. Resolution is stateless: every call
//! re-reads the record through the store's get-or-default operation, so a
//! missing record is synthesized with placeholder tiers on first access.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use strat_resolver::{ResourceType, StrategyManager, StrategyResolver, watch_scope};
//! use strat_store::FileStore;
//!
//! let scope = watch_scope().unwrap_or_else(|| "cloud-resources".into());
//! let store = Arc::new(FileStore::new("/var/lib/strategy-manager"));
//! let resolver = StrategyResolver::with_record("cloud-resources-strategies", scope, store);
//!
//! let strategy = resolver
//!     .read_storage_strategy(&ResourceType::postgres(), "production")
//!     .await?;
//! ```

pub mod defaults;
pub mod error;
pub mod resolver;
pub mod resource;
pub mod strategy;

pub use defaults::{
    DEFAULT_RECORD_NAME, DEFAULT_SCOPE, WATCH_SCOPE_ENV, default_strategy_record, watch_scope,
};
pub use error::{Error, Result};
pub use resolver::{StrategyManager, StrategyResolver};
pub use resource::{ResourceType, TIER_DEVELOPMENT, TIER_PRODUCTION};
pub use strategy::{StrategyConfig, TierMapping, decode_tier_mapping, encode_tier_mapping};
