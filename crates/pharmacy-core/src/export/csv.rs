//! CSV export of tabular data.

use serde::de::DeserializeOwned;

use super::ExportFile;
use crate::models::{Record, StorageKey};
use crate::store::{KeyValueStore, RecordStore};
use crate::{PharmacyError, Result};

pub const DEFAULT_CSV_FILENAME: &str = "export.csv";

/// Render rows of cells as CSV.
///
/// Every cell is trimmed and quoted, with embedded quotes doubled. Cells
/// are joined with `,` and rows with `\n` (no trailing newline).
pub fn table_to_csv<C: AsRef<str>>(rows: &[Vec<C>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_csv(cell.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a single cell.
pub fn escape_csv(cell: &str) -> String {
    format!("\"{}\"", cell.trim().replace('"', "\"\""))
}

/// A header row of field names followed by one row per record.
pub fn records_to_table<T: Record>(records: &[T]) -> Vec<Vec<String>> {
    let header = T::FIELDS.iter().map(|f| f.to_string()).collect();

    std::iter::once(header)
        .chain(records.iter().map(|record| {
            T::FIELDS
                .iter()
                .map(|f| record.field(f).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        }))
        .collect()
}

/// Export the stored collection under `key` as a CSV table.
///
/// Fails with [`PharmacyError::MissingData`] when the key is absent.
pub fn export_csv<T, S>(store: &S, key: StorageKey, filename: Option<&str>) -> Result<ExportFile>
where
    T: Record + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let records: Vec<T> = store
        .get_records(key)?
        .ok_or_else(|| PharmacyError::MissingData(key.to_string()))?;

    let file = ExportFile {
        filename: filename.unwrap_or(DEFAULT_CSV_FILENAME).to_string(),
        content_type: "text/csv".to_string(),
        contents: table_to_csv(&records_to_table(&records)),
    };
    tracing::info!("Exported {} {} row(s) to {}", records.len(), key, file.filename);
    Ok(file)
}
