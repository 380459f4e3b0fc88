//! In-memory store

use async_trait::async_trait;
use cfgate_config::ConfigDocument;
use tokio::sync::RwLock;

use crate::{ConfigStore, Result};

/// Holds the document in process memory; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<ConfigDocument>,
}

impl MemoryStore {
    pub fn new(document: ConfigDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    /// Copy of the currently stored document
    pub async fn snapshot(&self) -> ConfigDocument {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load(&self) -> Result<ConfigDocument> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, document: &ConfigDocument) -> Result<()> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}
