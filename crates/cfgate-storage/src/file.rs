//! JSON file store

use async_trait::async_trait;
use cfgate_config::ConfigDocument;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{ConfigStore, Result};

/// Keeps the document as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    /// A missing file loads as the default document.
    async fn load(&self) -> Result<ConfigDocument> {
        if !tokio::fs::try_exists(&self.path).await? {
            debug!("No document at {}, using defaults", self.path.display());
            return Ok(ConfigDocument::default());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    async fn save(&self, document: &ConfigDocument) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write then rename so readers never see a half-written file
        let content = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, content).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        debug!("Saved document to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("config.json"));

        let document = store.load().await.unwrap();
        assert_eq!(document, ConfigDocument::default());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("config.json"));

        let mut document = ConfigDocument::default();
        document.providers.openai.api_key = "sk-ABCDEFGH".to_string();
        document.gateway.port = 9000;
        store.save(&document).await.unwrap();

        assert!(!store.temp_path().exists());
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, document);

        // Persisted unmasked
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("sk-ABCDEFGH"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let store = FileStore::new(blocker.join("config.json"));
        let err = store.save(&ConfigDocument::default()).await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
