//! Storage layer for cfgate
//!
//! This crate provides:
//! - The `ConfigStore` load/save contract
//! - A JSON file store
//! - An in-memory store

pub mod error;
pub mod file;
pub mod memory;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use cfgate_config::ConfigDocument;

/// Persistence for the configuration document.
///
/// Implementations only load and save. Serializing read-then-write sequences
/// is up to the caller.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load(&self) -> Result<ConfigDocument>;

    async fn save(&self, document: &ConfigDocument) -> Result<()>;
}
