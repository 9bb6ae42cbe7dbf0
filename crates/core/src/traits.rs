//! Collaborator traits at the engine boundary
//!
//! The engine has no storage or schema of its own; it talks to three
//! abstractions:
//! - IndexableRecord: the capability any record type implements
//! - IndexStore: the set of persisted index entries
//! - IdResolver: maps an owner identifier back to a live record

use crate::error::Result;
use crate::types::{IndexEntry, OwnerId, StoredEntry};
use std::collections::HashSet;
use std::sync::Arc;

/// A record shared across the engine boundary
///
/// Records are handed around as trait objects so batch code can dispatch
/// to per-variant `search_indexes()` without knowing concrete types.
pub type SharedRecord = Arc<dyn IndexableRecord + Send + Sync>;

/// Capability implemented by any record type that participates in indexing
///
/// # Dirty-flag contract
///
/// The embedding must set the needs-reindex flag on construction and on any
/// mutation of a field named in [`indexed_fields`](Self::indexed_fields).
/// The engine only ever *clears* the flag, as the terminal step of a
/// successful reconciliation.
pub trait IndexableRecord {
    /// Stable opaque identifier of this record
    ///
    /// Must survive the record's lifetime and resolve back to it through
    /// an [`IdResolver`].
    fn owner_id(&self) -> OwnerId;

    /// Name of this record's kind (schema/entity name)
    fn entity_name(&self) -> &'static str;

    /// Names of the fields that, when changed, require reindexing
    fn indexed_fields(&self) -> &'static [&'static str];

    /// Compute the record's current set of raw index entries
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::RecordIndexing`] when a field cannot
    /// be turned into terms; the failure is scoped to this record.
    fn search_indexes(&self) -> Result<HashSet<IndexEntry>>;

    /// Whether this record's stored entries may be out of date
    fn needs_reindex(&self) -> bool;

    /// Mark this record's stored entries as current
    fn clear_needs_reindex(&self);
}

/// The set of persisted index entries
///
/// Owned and mutated only by the reconciler; query engines read it.
/// Implementations decide locking and transactional discipline, but must
/// guarantee a query never observes a half-reconciled record.
pub trait IndexStore {
    /// All entries currently stored for one owning record
    fn entries_for(&self, owner: &OwnerId) -> Result<Vec<StoredEntry>>;

    /// Persist a new entry
    fn insert(&self, entry: StoredEntry) -> Result<()>;

    /// Remove a stale entry
    fn delete(&self, entry: &StoredEntry) -> Result<()>;

    /// All entries whose `clean_term` starts with the given prefix
    ///
    /// The prefix is assumed already normalized.
    fn scan_prefix(&self, clean_prefix: &str) -> Result<Vec<StoredEntry>>;

    /// All entries whose `clean_term` contains the given substring
    ///
    /// The needle is assumed already normalized.
    fn scan_contains(&self, needle: &str) -> Result<Vec<StoredEntry>>;

    /// All records of the named kind whose needs-reindex flag is set
    fn dirty_records_of(&self, type_name: &str) -> Result<Vec<SharedRecord>>;
}

/// Maps an opaque owner identifier back to a live record
pub trait IdResolver {
    /// Resolve an owner id, or None if the record was deleted
    fn resolve(&self, owner: &OwnerId) -> Option<SharedRecord>;
}
