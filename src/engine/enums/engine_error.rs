use crate::config::enums::configuration_error::ConfigurationError;
use crate::database::enums::storage_error::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
