use cfgate_config::{SchemaError, UnknownSection};
use cfgate_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnknownSection(#[from] UnknownSection),

    #[error(transparent)]
    SchemaInvalid(#[from] SchemaError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
