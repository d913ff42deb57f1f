//! Error types for shopfront storage.

use std::path::PathBuf;

use shopfront_core::Entity;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while building a store.
///
/// A built store never fails; these only surface at startup.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid seed JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Two records in one collection share an identifier.
    #[error("duplicate {entity} id: {id}")]
    DuplicateId {
        /// The collection containing the duplicate.
        entity: Entity,
        /// The repeated identifier.
        id: u32,
    },

    /// A record breaks a field constraint.
    #[error("invalid {entity} {id}: {reason}")]
    InvalidRecord {
        /// The collection containing the record.
        entity: Entity,
        /// The record's identifier.
        id: u32,
        /// The constraint that failed.
        reason: &'static str,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
