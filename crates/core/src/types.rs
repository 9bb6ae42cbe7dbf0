//! Core types for the termdex index
//!
//! This module defines the foundational types:
//! - Category: semantic kind of an index term
//! - OwnerId: stable opaque identifier of an indexed record
//! - IndexEntry: raw (category, term) pair produced by a record
//! - StoredEntry: persisted form of an entry, with its normalized term
//! - Completion: aggregated prefix-query result
//! - BatchReport: outcome of a batch reindex run

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic kind of an index term (title, keyword, genre, ...)
///
/// Category is an open set: record crates declare their own constants
/// without this crate having to know about them. Existing values never
/// change meaning when new categories are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(pub u16);

impl Category {
    /// Create a category from its raw value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw value of this category
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category:{}", self.0)
    }
}

/// Stable opaque identifier of the record that owns an index entry
///
/// An OwnerId must outlive any mutation of the record and be resolvable
/// back to it through an [`crate::traits::IdResolver`]. The engine treats
/// it as an opaque string; embeddings choose the minting scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// Wrap an identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Raw (category, term) pair derived from a record
///
/// Equality and hashing are over the *raw* term exactly (case-sensitive,
/// accent-sensitive). This is what decides whether an entry is "unchanged"
/// during reconciliation; normalization only happens when the entry is
/// materialized into a [`StoredEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// Semantic kind of the term
    pub category: Category,
    /// Raw term text as the record produced it
    pub term: String,
}

impl IndexEntry {
    /// Create a new index entry
    pub fn new(category: Category, term: impl Into<String>) -> Self {
        Self {
            category,
            term: term.into(),
        }
    }
}

/// Persisted form of an index entry
///
/// `clean_term` is always the normalizer's output applied to `term`; it is
/// never independently mutated. `owner_type` names the record's kind and is
/// informational only — queries never filter on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Raw term as produced by the record
    pub term: String,
    /// Diacritic- and case-folded form of `term`
    pub clean_term: String,
    /// Semantic kind of the term
    pub category: Category,
    /// Name of the owning record's kind
    pub owner_type: String,
    /// Stable identifier of the owning record
    pub owner_id: OwnerId,
}

impl StoredEntry {
    /// Recover the raw (category, term) pair this entry was materialized from
    ///
    /// Used by reconciliation to match stored rows against a record's
    /// freshly computed entry set.
    pub fn index(&self) -> IndexEntry {
        IndexEntry::new(self.category, self.term.clone())
    }
}

/// Aggregated prefix-query result: one (term, category) group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Raw term shared by the group
    pub term: String,
    /// Number of distinct owning records in the group
    pub count: usize,
    /// Semantic kind of the term
    pub category: Category,
}

/// Outcome of a batch reindex run
///
/// A per-record failure does not abort the batch; it lands here instead.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of records successfully reconciled
    pub indexed: usize,
    /// Records whose reconciliation failed, with the failure
    pub failures: Vec<(OwnerId, Error)>,
}

impl BatchReport {
    /// True when every dirty record reconciled cleanly
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
