//! Configuration record store for Strategy Manager
//!
//! Provides the persisted record model and the get-or-default store seam
//! consumed by the strategy resolver, plus two store implementations:
//! an in-memory store and a file-backed store.

pub mod error;
pub mod file;
pub mod io;
pub mod memory;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{ConfigRecord, RecordId};
pub use store::RecordStore;
