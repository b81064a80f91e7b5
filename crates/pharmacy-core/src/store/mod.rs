//! Storage interface for record collections.
//!
//! [`KeyValueStore`] is the raw string store (SQLite or memory).
//! [`RecordStore`] layers typed JSON arrays on top of it and is implemented
//! for every `KeyValueStore`.

mod memory;

pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::StorageKey;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Malformed data under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Abstract string key-value store.
///
/// All methods take `&self`; backends use interior mutability since
/// access is single-threaded.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    fn contains_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }

    /// Write several values as one unit.
    ///
    /// If any write fails, the values replaced by earlier writes in the same
    /// call are put back before the error is returned.
    fn set_items(&self, entries: &[(&str, &str)]) -> StoreResult<()> {
        let previous = entries
            .iter()
            .map(|(key, _)| self.get_item(key))
            .collect::<StoreResult<Vec<_>>>()?;

        for (i, (key, value)) in entries.iter().enumerate() {
            if let Err(e) = self.set_item(key, value) {
                for ((key, _), old) in entries[..i].iter().zip(&previous[..i]).rev() {
                    let restored = match old {
                        Some(old) => self.set_item(key, old),
                        None => self.remove_item(key),
                    };
                    if let Err(restore_err) = restored {
                        tracing::error!("Failed to restore '{}': {}", key, restore_err);
                    }
                }
                return Err(e);
            }
        }
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(Database::get_item(self, key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(Database::set_item(self, key, value)?)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        Database::remove_item(self, key)?;
        Ok(())
    }

    fn set_items(&self, entries: &[(&str, &str)]) -> StoreResult<()> {
        Ok(Database::set_items(self, entries)?)
    }
}

/// Typed access to the JSON arrays held under each [`StorageKey`].
pub trait RecordStore {
    /// Load the records under `key`; `None` if the key is absent.
    ///
    /// Stored text that is not a JSON array of `T` fails with
    /// [`StoreError::Malformed`].
    fn get_records<T: DeserializeOwned>(&self, key: StorageKey) -> StoreResult<Option<Vec<T>>>;

    /// Replace the whole collection under `key`.
    fn put_records<T: Serialize>(&self, key: StorageKey, records: &[T]) -> StoreResult<()>;

    /// Load the records under `key`, treating an absent key as empty.
    fn get_records_or_empty<T: DeserializeOwned>(&self, key: StorageKey) -> StoreResult<Vec<T>> {
        Ok(self.get_records(key)?.unwrap_or_default())
    }
}

impl<S: KeyValueStore + ?Sized> RecordStore for S {
    fn get_records<T: DeserializeOwned>(&self, key: StorageKey) -> StoreResult<Option<Vec<T>>> {
        let Some(raw) = self.get_item(key.as_str())? else {
            return Ok(None);
        };
        let records = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(records))
    }

    fn put_records<T: Serialize>(&self, key: StorageKey, records: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string(records)?;
        self.set_item(key.as_str(), &json)
    }
}
