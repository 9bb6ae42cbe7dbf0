//! Book record
//!
//! A book indexes its title, its genre label, and each of its
//! comma-separated keywords.

use crate::{categories, keyword_entries};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use termdex_core::{IndexEntry, IndexableRecord, OwnerId, Result};
use uuid::Uuid;

struct BookFields {
    title: String,
    keywords: String,
    genre: String,
}

/// A book: title, genre, and a comma-separated keyword list
///
/// # Example
///
/// ```
/// use termdex_records::Book;
/// use termdex_core::IndexableRecord;
///
/// let book = Book::new("Dune", "sand, desert", "Fiction");
/// assert!(book.needs_reindex());
/// assert_eq!(book.search_indexes().unwrap().len(), 4);
/// ```
pub struct Book {
    id: OwnerId,
    fields: RwLock<BookFields>,
    dirty: AtomicBool,
}

impl Book {
    /// Entity name shared by every book
    pub const ENTITY_NAME: &'static str = "Book";

    /// Create a book with a freshly minted owner id
    ///
    /// New records start dirty: they have never been indexed.
    pub fn new(
        title: impl Into<String>,
        keywords: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: OwnerId::new(format!("book/{}", Uuid::new_v4())),
            fields: RwLock::new(BookFields {
                title: title.into(),
                keywords: keywords.into(),
                genre: genre.into(),
            }),
            dirty: AtomicBool::new(true),
        }
    }

    /// Current title
    pub fn title(&self) -> String {
        self.fields.read().title.clone()
    }

    /// Current genre label
    pub fn genre(&self) -> String {
        self.fields.read().genre.clone()
    }

    /// Current raw keyword field
    pub fn keywords(&self) -> String {
        self.fields.read().keywords.clone()
    }

    /// Replace the title and mark the book for reindexing
    pub fn set_title(&self, title: impl Into<String>) {
        self.fields.write().title = title.into();
        self.dirty.store(true, Ordering::Release);
    }

    /// Replace the keyword field and mark the book for reindexing
    pub fn set_keywords(&self, keywords: impl Into<String>) {
        self.fields.write().keywords = keywords.into();
        self.dirty.store(true, Ordering::Release);
    }

    /// Replace the genre and mark the book for reindexing
    pub fn set_genre(&self, genre: impl Into<String>) {
        self.fields.write().genre = genre.into();
        self.dirty.store(true, Ordering::Release);
    }
}

impl IndexableRecord for Book {
    fn owner_id(&self) -> OwnerId {
        self.id.clone()
    }

    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }

    fn indexed_fields(&self) -> &'static [&'static str] {
        &["title", "keywords", "genre"]
    }

    fn search_indexes(&self) -> Result<HashSet<IndexEntry>> {
        let fields = self.fields.read();
        let mut entries = HashSet::from([
            IndexEntry::new(categories::TITLE, fields.title.clone()),
            IndexEntry::new(categories::GENRE, fields.genre.clone()),
        ]);
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
