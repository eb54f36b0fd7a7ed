//! Error types shared across the console crates

use std::time::Duration;
use thiserror::Error;

/// Standard result type for console operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage is not available")]
    StorageUnavailable,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Hotel lookup failed: {0}")]
    LookupFailed(String),

    #[error("Hotel lookup timed out after {0:?}")]
    LookupTimedOut(Duration),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a hotel lookup error
    pub fn lookup_failed(message: impl Into<String>) -> Self {
        Self::LookupFailed(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
