use std::sync::Arc;

use cfgate_config::Section;
use cfgate_security::{merge_section, redact};
use cfgate_storage::ConfigStore;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::Result;

/// Read and write paths over the stored configuration document.
///
/// Every call loads the document afresh. Responses are always redacted and
/// the store only ever receives unmasked values.
pub struct ConfigService {
    store: Arc<dyn ConfigStore>,
}

impl ConfigService {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Full document, secrets masked
    pub async fn get_document(&self) -> Result<Value> {
        let document = self.store.load().await?;
        Ok(redact(document.to_value()?))
    }

    /// Apply a partial document.
    ///
    /// Keys that are not section names are ignored. If any section fails
    /// validation nothing is saved.
    pub async fn put_document(&self, mut body: Map<String, Value>) -> Result<Value> {
        let mut document = self.store.load().await?;

        for section in Section::ALL {
            let Some(update) = body.remove(section.as_str()) else {
                continue;
            };
            let stored = document.section(section)?;
            document.set_section(section, merge_section(update, &stored))?;
            debug!("Merged {} section", section);
        }

        self.store.save(&document).await?;
        info!("Updated configuration document");

        Ok(redact(document.to_value()?))
    }

    /// One section, secrets masked
    pub async fn get_section(&self, name: &str) -> Result<Value> {
        let section: Section = name.parse()?;
        let document = self.store.load().await?;
        Ok(redact(document.section(section)?))
    }

    /// Apply a partial section and return the merged result, secrets masked
    pub async fn put_section(&self, name: &str, body: Value) -> Result<Value> {
        let section: Section = name.parse()?;
        let mut document = self.store.load().await?;

        let stored = document.section(section)?;
        document.set_section(section, merge_section(body, &stored))?;

        self.store.save(&document).await?;
        info!("Updated {} section", section);

        Ok(redact(document.section(section)?))
    }
}
