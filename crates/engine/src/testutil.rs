//! Test doubles shared by the engine's unit tests
//!
//! A write-counting store and a scriptable record, so tests can assert the
//! exact number of writes a reconciliation performed and inject store or
//! record failures.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use termdex_core::{
    Error, IdResolver, IndexEntry, IndexStore, IndexableRecord, OwnerId, Result, SharedRecord,
    StoredEntry,
};

/// In-memory store that counts writes and can be told to fail
#[derive(Default)]
pub struct CountingStore {
    rows: Mutex<Vec<StoredEntry>>,
    records: Mutex<Vec<SharedRecord>>,
    pub inserts: AtomicUsize,
    pub deletes: AtomicUsize,
    pub fail_writes: AtomicBool,
    pub fail_reads: AtomicBool,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&self, record: SharedRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Insert a row directly, bypassing reconciliation
    pub fn seed(&self, entry: StoredEntry) {
        self.rows.lock().unwrap().push(entry);
    }

    pub fn rows(&self) -> Vec<StoredEntry> {
        self.rows.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.inserts.load(Ordering::Relaxed) + self.deletes.load(Ordering::Relaxed)
    }
}

impl IndexStore for CountingStore {
    fn entries_for(&self, owner: &OwnerId) -> Result<Vec<StoredEntry>> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(Error::StoreRead("injected read failure".to_string()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.owner_id == owner)
            .cloned()
            .collect())
    }

    fn insert(&self, entry: StoredEntry) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(Error::StoreWrite("injected write failure".to_string()));
        }
        self.inserts.fetch_add(1, Ordering::Relaxed);
        self.rows.lock().unwrap().push(entry);
        Ok(())
    }

    fn delete(&self, entry: &StoredEntry) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(Error::StoreWrite("injected write failure".to_string()));
        }
        self.deletes.fetch_add(1, Ordering::Relaxed);
        self.rows.lock().unwrap().retain(|r| r != entry);
        Ok(())
    }

    fn scan_prefix(&self, clean_prefix: &str) -> Result<Vec<StoredEntry>> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(Error::StoreRead("injected read failure".to_string()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.clean_term.starts_with(clean_prefix))
            .cloned()
            .collect())
    }

    fn scan_contains(&self, needle: &str) -> Result<Vec<StoredEntry>> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(Error::StoreRead("injected read failure".to_string()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.clean_term.contains(needle))
            .cloned()
            .collect())
    }

    fn dirty_records_of(&self, type_name: &str) -> Result<Vec<SharedRecord>> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(Error::StoreRead("injected read failure".to_string()));
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.entity_name() == type_name && r.needs_reindex())
            .cloned()
            .collect())
    }
}

impl IdResolver for CountingStore {
    fn resolve(&self, owner: &OwnerId) -> Option<SharedRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.owner_id() == owner)
            .cloned()
    }
}

/// Record whose entry set tests can swap out, with optional indexing failure
pub struct ScriptedRecord {
    id: OwnerId,
    entries: Mutex<HashSet<IndexEntry>>,
    dirty: AtomicBool,
    fail_indexing: bool,
}

impl ScriptedRecord {
    pub fn new(id: &str, entries: impl IntoIterator<Item = IndexEntry>) -> Self {
        Self {
            id: OwnerId::new(id),
            entries: Mutex::new(entries.into_iter().collect()),
            dirty: AtomicBool::new(true),
            fail_indexing: false,
        }
    }

    /// A record whose `search_indexes()` always fails
    pub fn failing(id: &str) -> Self {
        Self {
            id: OwnerId::new(id),
            entries: Mutex::new(HashSet::new()),
            dirty: AtomicBool::new(true),
            fail_indexing: true,
        }
    }

    /// Replace the entry set and mark the record dirty
    pub fn set_entries(&self, entries: impl IntoIterator<Item = IndexEntry>) {
        *self.entries.lock().unwrap() = entries.into_iter().collect();
        self.dirty.store(true, Ordering::Release);
    }
}

impl IndexableRecord for ScriptedRecord {
    fn owner_id(&self) -> OwnerId {
        self.id.clone()
    }

    fn entity_name(&self) -> &'static str {
        "Scripted"
    }

    fn indexed_fields(&self) -> &'static [&'static str] {
        &["entries"]
    }

    fn search_indexes(&self) -> Result<HashSet<IndexEntry>> {
        if self.fail_indexing {
            return Err(Error::record_indexing(
                self.entity_name(),
                self.id.clone(),
                "scripted failure",
            ));
        }
        Ok(self.entries.lock().unwrap().clone())
    }

    fn needs_reindex(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn clear_needs_reindex(&self) {
        self.dirty.store(false, Ordering::Release);
    }
}
