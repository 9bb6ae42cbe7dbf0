//! termdex — embeddable inverted search index
//!
//! termdex keeps a searchable index of terms over arbitrary record types
//! and answers prefix-completion and full-text membership queries:
//!
//! - records implement the [`IndexableRecord`] capability and declare
//!   their own (category, term) entries;
//! - [`reconcile`]/[`build_indexes`] keep stored entries in sync with a
//!   record's current entry set using minimal writes;
//! - [`completions`] ranks prefix-matching (term, category) groups by the
//!   number of distinct records carrying them;
//! - [`search`] resolves substring matches back to live records.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use termdex::{build_indexes, completions, Book, MemoryIndexStore};
//!
//! let store = MemoryIndexStore::new();
//! store.register(Arc::new(Book::new("Dune", "sand, desert", "Fiction")));
//!
//! let report = build_indexes(&[Book::ENTITY_NAME], &store)?;
//! assert_eq!(report.indexed, 1);
//!
//! let groups = completions("du", &store)?;
//! assert_eq!(groups[0].term, "Dune");
//! # Ok::<(), termdex::Error>(())
//! ```
//!
//! Persistence is a collaborator, not a feature: embeddings implement
//! [`IndexStore`] and [`IdResolver`] over their own storage, and
//! [`MemoryIndexStore`] is the in-memory reference implementation.

// Re-export the public API
pub use termdex_core::{
    BatchReport, Category, Completion, Error, IdResolver, IndexEntry, IndexStore,
    IndexableRecord, OwnerId, Result, SharedRecord, StoredEntry,
};
pub use termdex_engine::{build_indexes, completions, normalize, reconcile, search};
pub use termdex_records::{categories, Book, Chapter, Page};
pub use termdex_store::MemoryIndexStore;
