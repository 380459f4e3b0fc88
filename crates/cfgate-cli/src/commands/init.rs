use anyhow::Result;
use cfgate_config::ConfigDocument;
use cfgate_storage::{ConfigStore, FileStore};

pub async fn handle(store: &FileStore) -> Result<()> {
    if store.path().exists() {
        anyhow::bail!("{} already exists", store.path().display());
    }

    store.save(&ConfigDocument::default()).await?;

    println!("✓ Created {}", store.path().display());
    println!("  Run 'cfgate serve' to edit it over HTTP");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("config.json"));

        handle(&store).await.unwrap();
        assert_eq!(store.load().await.unwrap(), ConfigDocument::default());

        assert!(handle(&store).await.is_err());
    }
}
