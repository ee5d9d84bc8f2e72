use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while loading or seeding reference collections.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog store read failed: {0}")]
    StoreRead(String),
    #[error("Catalog store write failed: {0}")]
    StoreWrite(String),
    #[error("Catalog record rejected: {0}")]
    Rejected(String),
}

impl CatalogError {
    pub fn from_read(err: FrameworkError) -> Self {
        CatalogError::StoreRead(err.to_string())
    }

    pub fn from_write(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Rejected(reason) => CatalogError::Rejected(reason),
            other => CatalogError::StoreWrite(other.to_string()),
        }
    }
}
