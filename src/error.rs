//! Error types for the Merkle DAG builder.

use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        match err {
            sled::Error::Io(io) => StorageError::IoError(io),
            other => StorageError::Backend(other.to_string()),
        }
    }
}

/// Errors raised while building a DAG.
///
/// Every variant is terminal for the `add` call that produced it. Writes
/// performed before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum DagError {
    #[error("Cannot reduce an empty hash sequence")]
    EmptySequence,

    #[error("Directory {name:?} has no children to reduce")]
    EmptyDirectory { name: String },

    #[error("Unsupported node kind tag: {0}")]
    UnsupportedKind(u8),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Top-level errors for configuration, logging and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Not found in store: {0}")]
    NotFound(String),

    #[error("DAG error: {0}")]
    Dag(#[from] DagError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
