use anyhow::Result;
use cfgate_core::ConfigService;
use cfgate_storage::FileStore;
use std::sync::Arc;

pub async fn handle(store: Arc<FileStore>, section: Option<String>) -> Result<()> {
    let service = ConfigService::new(store);

    let value = match section {
        Some(name) => service.get_section(&name).await?,
        None => service.get_document().await?,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
