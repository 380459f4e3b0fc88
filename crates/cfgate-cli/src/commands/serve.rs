use anyhow::Result;
use cfgate_server::ConfigServer;
use cfgate_storage::FileStore;
use std::sync::Arc;

pub async fn handle(store: Arc<FileStore>, host: String, port: u16, read_only: bool) -> Result<()> {
    println!(
        "Serving {} on http://{}:{}",
        store.path().display(),
        host,
        port
    );
    ConfigServer::serve(store, &host, port, read_only).await
}
