//! Multi-record deletion and collection clearing.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::StorageKey;
use crate::store::{KeyValueStore, RecordStore};
use crate::Result;

/// Remove the records at `indices` from a copy of `records`.
///
/// Indices are applied from highest to lowest so earlier removals cannot
/// shift later positions; duplicates and out-of-range indices are ignored.
pub fn remove_indices<T: Clone>(records: &[T], indices: &[usize]) -> Vec<T> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    let mut remaining = records.to_vec();
    for index in sorted {
        if index < remaining.len() {
            remaining.remove(index);
        }
    }
    remaining
}

/// Delete the records at `indices` in the stored collection.
///
/// An absent collection is treated as empty and written back as `[]`.
/// Returns how many records were removed.
pub fn delete_multiple<T, S>(store: &S, key: StorageKey, indices: &[usize]) -> Result<usize>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore + ?Sized,
{
    let records: Vec<T> = store.get_records_or_empty(key)?;
    let remaining = remove_indices(&records, indices);
    store.put_records(key, &remaining)?;

    let removed = records.len() - remaining.len();
    tracing::info!("Deleted {} record(s) from {}", removed, key);
    Ok(removed)
}

/// Remove the whole collection under `key`.
///
/// This cannot be undone; callers are expected to confirm first.
pub fn clear_all<S>(store: &S, key: StorageKey) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    store.remove_item(key.as_str())?;
    tracing::warn!("All {} have been deleted", key);
    Ok(())
}
