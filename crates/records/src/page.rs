//! Page record
//!
//! A page indexes its title and its comma-separated keywords.

use crate::{categories, keyword_entries};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use termdex_core::{IndexEntry, IndexableRecord, OwnerId, Result};
use uuid::Uuid;

struct PageFields {
    title: String,
    keywords: String,
}

/// A page within a chapter
pub struct Page {
    id: OwnerId,
    fields: RwLock<PageFields>,
    dirty: AtomicBool,
}

impl Page {
    /// Entity name shared by every page
    pub const ENTITY_NAME: &'static str = "Page";

    /// Create a page with a freshly minted owner id
    pub fn new(title: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(format!("page/{}", Uuid::new_v4())),
            fields: RwLock::new(PageFields {
                title: title.into(),
                keywords: keywords.into(),
            }),
            dirty: AtomicBool::new(true),
        }
    }

    /// Current title
    pub fn title(&self) -> String {
        self.fields.read().title.clone()
    }

    /// Current raw keyword field
    pub fn keywords(&self) -> String {
        self.fields.read().keywords.clone()
    }

    /// Replace the title and mark the page for reindexing
    pub fn set_title(&self, title: impl Into<String>) {
        self.fields.write().title = title.into();
        self.dirty.store(true, Ordering::Release);
    }

    /// Replace the keyword field and mark the page for reindexing
    pub fn set_keywords(&self, keywords: impl Into<String>) {
        self.fields.write().keywords = keywords.into();
        self.dirty.store(true, Ordering::Release);
    }
}

impl IndexableRecord for Page {
    fn owner_id(&self) -> OwnerId {
        self.id.clone()
    }

    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn indexed_fields(&self) -> &'static [&'static str] {
        &["title", "keywords"]
    }

    fn search_indexes(&self) -> Result<HashSet<IndexEntry>> {
        let fields = self.fields.read();
        let mut entries = HashSet::from([IndexEntry::new(
            categories::TITLE,
            fields.title.clone(),
        )]);
        entries.extend(keyword_entries(&fields.keywords));
        Ok(entries)
    }

    fn needs_reindex(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn clear_needs_reindex(&self) {
        self.dirty.store(false, Ordering::Release)
    }
}
