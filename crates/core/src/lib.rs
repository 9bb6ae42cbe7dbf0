//! Core types and traits for termdex
//!
//! This crate defines the foundational types used throughout the system:
//! - Category: semantic kind of an index term
//! - OwnerId: stable opaque identifier of an indexed record
//! - IndexEntry / StoredEntry: raw and persisted forms of an entry
//! - Completion: aggregated prefix-query result
//! - Error: error type hierarchy
//! - Traits: collaborator definitions (IndexableRecord, IndexStore, IdResolver)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use traits::{IdResolver, IndexStore, IndexableRecord, SharedRecord};
pub use types::{BatchReport, Category, Completion, IndexEntry, OwnerId, StoredEntry};
