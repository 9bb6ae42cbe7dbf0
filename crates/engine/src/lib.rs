//! Indexing engine for termdex
//!
//! This crate provides:
//! - Term normalizer (diacritic + case fold)
//! - Reconciler: minimal-write synchronization of stored entries
//! - Completion: ranked prefix-query groups
//! - Lookup: substring search resolved to live records
//!
//! The engine is synchronous and side-effect-scoped to the store it is
//! handed. Reconciliation of a single record must be serialized by the
//! caller; queries are read-only and run concurrently with anything.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod completion;
pub mod lookup;
pub mod normalizer;
pub mod reconciler;

#[cfg(test)]
mod testutil;

// Re-export the operation surface
pub use completion::completions;
pub use lookup::search;
pub use normalizer::normalize;
pub use reconciler::{build_indexes, reconcile};
