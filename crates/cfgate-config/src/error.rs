//! Error types for cfgate-config

use thiserror::Error;

use crate::Section;

/// A section name outside the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid {section} section: expected a mapping")]
    NotAMapping { section: Section },

    #[error("Invalid {section} section: {source}")]
    Invalid {
        section: Section,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    pub fn section(&self) -> Section {
        match self {
            Self::NotAMapping { section } | Self::Invalid { section, .. } => *section,
        }
    }
}
