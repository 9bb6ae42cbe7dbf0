//! Full-text object lookup
//!
//! Lookup answers "which records mention this?": the query is folded,
//! stored rows are substring-scanned on their folded form, and each match
//! is resolved back to its owning record. One record matching through
//! several entries appears once.

use crate::normalizer::normalize;
use std::collections::HashSet;
use termdex_core::{IdResolver, IndexStore, Result, SharedRecord};

/// Find the distinct records with an entry whose folded term contains `query`
///
/// Entries whose owner no longer resolves are skipped silently; orphan
/// cleanup is the store's concern, not a query-time error. An empty query
/// yields no records (an empty substring would match every entry).
///
/// # Errors
///
/// A store scan failure propagates whole; there is no partial result.
pub fn search(
    query: &str,
    store: &dyn IndexStore,
    resolver: &dyn IdResolver,
) -> Result<Vec<SharedRecord>> {
    let folded = normalize(query);
    if folded.is_empty() {
        return Ok(Vec::new());
    }

    let rows = store.scan_contains(&folded)?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for row in rows {
        if !seen.insert(row.owner_id.clone()) {
            continue;
        }
        if let Some(record) = resolver.resolve(&row.owner_id) {
            records.push(record);
        }
    }
    Ok(records)
}
