mod cli;
mod commands;

use anyhow::Result;
use cfgate_config::Settings;
use cfgate_storage::FileStore;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let settings_path = Settings::settings_path();

    match cli.command {
        cli::Commands::Serve {
            port,
            host,
            read_only,
        } => {
            let settings = Settings::load_from(&settings_path)?;
            let path = cli
                .store
                .unwrap_or_else(|| settings.store.document_path());
            let host = host.unwrap_or(settings.server.host);
            let port = port.unwrap_or(settings.server.port);
            let read_only = read_only || settings.server.read_only;
            commands::serve::handle(Arc::new(FileStore::new(path)), host, port, read_only).await
        }
        cli::Commands::Show { section } => {
            let path = document_path(cli.store, &settings_path)?;
            commands::show::handle(Arc::new(FileStore::new(path)), section).await
        }
        cli::Commands::Init => {
            let path = document_path(cli.store, &settings_path)?;
            commands::init::handle(&FileStore::new(path)).await
        }
    }
}

/// The `--store` flag wins; the settings file is only read without it.
fn document_path(flag: Option<PathBuf>, settings_path: &Path) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => Ok(Settings::load_from(settings_path)?.store.document_path()),
    }
}
