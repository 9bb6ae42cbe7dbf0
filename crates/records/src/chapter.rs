//! Chapter record
//!
//! A chapter indexes only its title.

use crate::categories;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use termdex_core::{IndexEntry, IndexableRecord, OwnerId, Result};
use uuid::Uuid;

/// A chapter within a book
pub struct Chapter {
    id: OwnerId,
    title: RwLock<String>,
    dirty: AtomicBool,
}

impl Chapter {
    /// Entity name shared by every chapter
    pub const ENTITY_NAME: &'static str = "Chapter";

    /// Create a chapter with a freshly minted owner id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(format!("chapter/{}", Uuid::new_v4())),
            title: RwLock::new(title.into()),
            dirty: AtomicBool::new(true),
        }
    }

    /// Current title
    pub fn title(&self) -> String {
        self.title.read().clone()
    }

    /// Replace the title and mark the chapter for reindexing
    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.write() = title.into();
        self.dirty.store(true, Ordering::Release);
    }
}

impl IndexableRecord for Chapter {
    fn owner_id(&self) -> OwnerId {
        self.id.clone()
    }

    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn indexed_fields(&self) -> &'static [&'static str] {
        &["title"]
    }

    fn search_indexes(&self) -> Result<HashSet<IndexEntry>> {
        Ok(HashSet::from([IndexEntry::new(
            categories::TITLE,
            self.title(),
        )]))
    }

    fn needs_reindex(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn clear_needs_reindex(&self) {
        self.dirty.store(false, Ordering::Release)
    }
}
