//! Example indexable record types
//!
//! Book, Chapter and Page implement the `IndexableRecord` capability and
//! show the dirty-flag contract an embedding is expected to honor: the flag
//! is set on construction and by every indexed-field setter, and only the
//! reconciler clears it. Fields live behind `RwLock` so records can be
//! mutated through a `SharedRecord` handle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod chapter;
pub mod page;

pub use book::Book;
pub use chapter::Chapter;
pub use page::Page;

use termdex_core::{Category, IndexEntry};

/// Well-known term categories used by the example records
///
/// Category is an open set; embeddings register further values without
/// disturbing these.
pub mod categories {
    use termdex_core::Category;

    /// A record's own display name
    pub const ENTITY: Category = Category::new(0);
    /// Title text
    pub const TITLE: Category = Category::new(1);
    /// Free-form keyword
    pub const KEYWORD: Category = Category::new(2);
    /// Genre label
    pub const GENRE: Category = Category::new(3);
}

/// Split a comma-separated keyword field into KEYWORD entries
///
/// Fragments are whitespace-trimmed; fragments that trim to empty are
/// dropped rather than indexed as empty terms.
pub(crate) fn keyword_entries(raw: &str) -> impl Iterator<Item = IndexEntry> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| IndexEntry::new(categories::KEYWORD, k))
}
