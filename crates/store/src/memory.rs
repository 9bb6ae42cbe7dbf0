//! In-memory index store
//!
//! Reference implementation of the [`IndexStore`] and [`IdResolver`]
//! collaborators: entry rows keyed per owner, plus a catalog of live
//! records backing dirty-record enumeration and id resolution.
//!
//! # Thread Safety
//!
//! Backed by DashMap; the store is `Send + Sync` and supports concurrent
//! readers and writers. Per-record reconciliation atomicity is the
//! caller's duty: reconcile one owner from one thread at a time, and
//! queries will only ever see that owner's rows fully-pre or fully-post
//! reconciliation.

use dashmap::DashMap;
use termdex_core::{
    IdResolver, IndexStore, OwnerId, Result, SharedRecord, StoredEntry,
};
use tracing::debug;

/// DashMap-backed [`IndexStore`] + [`IdResolver`]
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use termdex_store::MemoryIndexStore;
///
/// let store = MemoryIndexStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Default)]
pub struct MemoryIndexStore {
    /// Entry rows, keyed by owning record
    rows: DashMap<OwnerId, Vec<StoredEntry>>,
    /// Live records, keyed by owner id
    catalog: DashMap<OwnerId, SharedRecord>,
}

impl MemoryIndexStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the catalog, making it resolvable and reindexable
    pub fn register(&self, record: SharedRecord) {
        debug!(owner = %record.owner_id(), entity = record.entity_name(), "registering record");
        self.catalog.insert(record.owner_id(), record);
    }

    /// Drop a record from the catalog
    ///
    /// Its entry rows are left behind; removing them is [`Self::purge`]'s
    /// job. Lookup queries skip rows whose owner no longer resolves.
    pub fn evict(&self, owner: &OwnerId) -> Option<SharedRecord> {
        self.catalog.remove(owner).map(|(_, record)| record)
    }

    /// Remove every entry row stored for an owner
    ///
    /// Companion to [`Self::evict`] when a record is deleted for good.
    pub fn purge(&self, owner: &OwnerId) -> usize {
        self.rows.remove(owner).map(|(_, v)| v.len()).unwrap_or(0)
    }

    /// Total number of entry rows currently stored
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(|r| r.value().len()).sum()
    }

    /// Number of records in the catalog
    pub fn record_count(&self) -> usize {
        self.catalog.len()
    }

    /// True when no entry rows are stored
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    fn scan(&self, pred: impl Fn(&StoredEntry) -> bool) -> Vec<StoredEntry> {
        self.rows
            .iter()
            .flat_map(|r| r.value().iter().filter(|e| pred(e)).cloned().collect::<Vec<_>>())
            .collect()
    }
}

impl IndexStore for MemoryIndexStore {
    fn entries_for(&self, owner: &OwnerId) -> Result<Vec<StoredEntry>> {
        Ok(self.rows.get(owner).map(|r| r.clone()).unwrap_or_default())
    }

    fn insert(&self, entry: StoredEntry) -> Result<()> {
        self.rows
            .entry(entry.owner_id.clone())
            .or_default()
            .push(entry);
        Ok(())
    }

    fn delete(&self, entry: &StoredEntry) -> Result<()> {
        if let Some(mut rows) = self.rows.get_mut(&entry.owner_id) {
            rows.retain(|e| e != entry);
        }
        Ok(())
    }

    fn scan_prefix(&self, clean_prefix: &str) -> Result<Vec<StoredEntry>> {
        Ok(self.scan(|e| e.clean_term.starts_with(clean_prefix)))
    }

    fn scan_contains(&self, needle: &str) -> Result<Vec<StoredEntry>> {
        Ok(self.scan(|e| e.clean_term.contains(needle)))
    }

    fn dirty_records_of(&self, type_name: &str) -> Result<Vec<SharedRecord>> {
        Ok(self
            .catalog
            .iter()
            .filter(|r| r.value().entity_name() == type_name && r.value().needs_reindex())
            .map(|r| r.value().clone())
            .collect())
    }
}

impl IdResolver for MemoryIndexStore {
    fn resolve(&self, owner: &OwnerId) -> Option<SharedRecord> {
        self.catalog.get(owner).map(|r| r.value().clone())
    }
}
