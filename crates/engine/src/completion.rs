//! Prefix-completion queries
//!
//! Completion answers "what terms start with this?" for autosuggest: the
//! query is folded, stored rows are prefix-scanned on their folded form,
//! and matches are grouped by raw (term, category) with a distinct-owner
//! count per group.

use crate::normalizer::normalize;
use std::collections::{HashMap, HashSet};
use termdex_core::{Category, Completion, IndexStore, OwnerId, Result};

/// Rank the (term, category) groups whose folded term starts with `query`
///
/// `count` is the number of *distinct* owning records per group; an owner
/// with duplicate rows is counted once. Results are ordered descending by
/// count, ties unordered. Callers wanting per-category buckets split the
/// flat list themselves, which keeps the count order within each bucket.
///
/// An empty (or all-foldable-to-empty) query yields no completions.
///
/// # Errors
///
/// A store scan failure propagates whole; there is no partial result.
pub fn completions(query: &str, store: &dyn IndexStore) -> Result<Vec<Completion>> {
    let folded = normalize(query);
    if folded.is_empty() {
        return Ok(Vec::new());
    }

    let rows = store.scan_prefix(&folded)?;

    let mut groups: HashMap<(String, Category), HashSet<OwnerId>> = HashMap::new();
    for row in rows {
        groups
            .entry((row.term, row.category))
            .or_default()
            .insert(row.owner_id);
    }

    let mut results: Vec<Completion> = groups
        .into_iter()
        .map(|((term, category), owners)| Completion {
            term,
            count: owners.len(),
            category,
        })
        .collect();
    results.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(results)
}
