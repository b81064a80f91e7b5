//! JSON export of a whole collection.

use chrono::NaiveDate;

use super::ExportFile;
use crate::models::StorageKey;
use crate::store::{KeyValueStore, StoreError};
use crate::{PharmacyError, Result};

/// Export the collection under `key` as pretty-printed JSON named
/// `{key}_{today}.json`.
///
/// Fails with [`PharmacyError::MissingData`] when the key holds no data.
pub fn export_json<S>(store: &S, key: StorageKey, today: NaiveDate) -> Result<ExportFile>
where
    S: KeyValueStore + ?Sized,
{
    let raw = store
        .get_item(key.as_str())?
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| PharmacyError::MissingData(key.to_string()))?;

    // re-indent whatever is stored; the value need not match a record type
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
    let contents = serde_json::to_string_pretty(&value)?;

    let file = ExportFile {
        filename: format!("{}_{}.json", key, today.format("%Y-%m-%d")),
        content_type: "application/json".to_string(),
        contents,
    };
    tracing::info!("Exported {} to {}", key, file.filename);
    Ok(file)
}
