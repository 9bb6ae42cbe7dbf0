//! Reconciliation: the index write path
//!
//! Given one record, compute the symmetric difference between its freshly
//! derived entry set and the rows currently stored for it, then delete only
//! the stale rows and insert only the new ones. Unchanged terms incur zero
//! writes, so reconciling an unmodified record is free.

use crate::normalizer::normalize;
use termdex_core::{BatchReport, IndexStore, IndexableRecord, Result, StoredEntry};
use tracing::{debug, warn};

/// Bring the store's rows for one record in line with its current entry set
///
/// Steps:
/// 1. Compute the record's desired raw entry set.
/// 2. Fetch the rows currently stored for its owner id.
/// 3. Rows whose raw (category, term) pair is still desired are kept and
///    removed from the desired set; the rest are deleted as stale.
/// 4. Whatever remains in the desired set is new: each entry is normalized
///    and inserted.
/// 5. The needs-reindex flag is cleared, as the terminal step.
///
/// # Errors
///
/// Any store failure propagates and leaves the flag set, so the record is
/// retried on the next batch run. The diff-based plan makes the retry
/// converge from whatever state the store was left in.
pub fn reconcile(record: &dyn IndexableRecord, store: &dyn IndexStore) -> Result<()> {
    let owner = record.owner_id();
    let mut desired = record.search_indexes()?;
    let existing = store.entries_for(&owner)?;

    // Keep rows whose raw pair is unchanged; everything else is stale.
    let mut stale = Vec::new();
    for row in existing {
        if !desired.remove(&row.index()) {
            stale.push(row);
        }
    }

    if stale.is_empty() && desired.is_empty() {
        record.clear_needs_reindex();
        return Ok(());
    }

    debug!(
        owner = %owner,
        entity = record.entity_name(),
        deletes = stale.len(),
        inserts = desired.len(),
        "reconciling index entries"
    );

    for row in &stale {
        store.delete(row)?;
    }
    for entry in desired {
        let clean_term = normalize(&entry.term);
        store.insert(StoredEntry {
            term: entry.term,
            clean_term,
            category: entry.category,
            owner_type: record.entity_name().to_string(),
            owner_id: owner.clone(),
        })?;
    }

    record.clear_needs_reindex();
    Ok(())
}

/// Reconcile every dirty record of the named kinds
///
/// Record order is unspecified and carries no dependency. A record that
/// fails to reconcile — whether its `search_indexes()` failed or the store
/// rejected a write — is reported in the returned [`BatchReport`] and does
/// not stop the batch; its dirty flag stays set for the next run. A failure
/// listing a kind's dirty records aborts the whole batch, since nothing
/// sensible can be retried from that state.
pub fn build_indexes(type_names: &[&str], store: &dyn IndexStore) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for name in type_names {
        let dirty = store.dirty_records_of(name)?;
        if dirty.is_empty() {
            continue;
        }
        debug!(entity = name, count = dirty.len(), "rebuilding indexes");

        for record in dirty {
            match reconcile(record.as_ref(), store) {
                Ok(()) => report.indexed += 1,
                Err(err) => {
                    warn!(owner = %record.owner_id(), error = %err, "record failed to reindex");
                    report.failures.push((record.owner_id(), err));
                }
            }
        }
    }

    Ok(report)
}
