//! Error types for the termdex index
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::OwnerId;
use thiserror::Error;

/// Result type alias for termdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the termdex index
#[derive(Debug, Error)]
pub enum Error {
    /// The store rejected an insert or delete during reconciliation
    ///
    /// The record's needs-reindex flag stays set so the next batch run
    /// retries it.
    #[error("Store write failed: {0}")]
    StoreWrite(String),

    /// A store scan failed during a completion or lookup query
    ///
    /// Queries fail whole rather than returning partial results; a partial
    /// completion count would be misleading.
    #[error("Store read failed: {0}")]
    StoreRead(String),

    /// A record could not compute its index entries (malformed field)
    ///
    /// Scoped to the one record; batch reindex continues past it.
    #[error("Failed to index {owner_type} record {owner_id}: {reason}")]
    RecordIndexing {
        /// Kind of the failing record
        owner_type: String,
        /// Identifier of the failing record
        owner_id: OwnerId,
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Construct a [`Error::RecordIndexing`] for one record
    pub fn record_indexing(
        owner_type: impl Into<String>,
        owner_id: OwnerId,
        reason: impl Into<String>,
    ) -> Self {
        Error::RecordIndexing {
            owner_type: owner_type.into(),
            owner_id,
            reason: reason.into(),
        }
    }
}
