//! Pharmacy Core Library
//!
//! Local-first record utilities for a small pharmacy inventory: medicines,
//! suppliers and sales held as JSON arrays in a key-value store.
//!
//! # Architecture
//!
//! ```text
//!   KeyValueStore (SQLite | memory)
//!          │  get_item / set_item / remove_item
//!          ▼
//!   RecordStore  ── JSON arrays under "medicines" / "suppliers" / "sales"
//!          │
//!   ┌──────┼────────────┬─────────────┬──────────────┐
//!   ▼      ▼            ▼             ▼              ▼
//! seed   query        stats         batch          export
//!        (search,     (stock,       (delete by     (JSON file,
//!         sort)        revenue)      index, clear)  CSV table)
//! ```
//!
//! Validation is advisory: it returns a [`ValidationResult`] for the caller
//! to act on and never fails an operation by itself.
//!
//! # Modules
//!
//! - [`db`]: SQLite key-value table
//! - [`store`]: storage traits and the in-memory backend
//! - [`models`]: `Medicine`, `Supplier`, `Sale` and named field access
//! - [`seed`]: first-run sample data
//! - [`query`]: search and sort
//! - [`stats`]: inventory and sales statistics
//! - [`validation`]: form validation
//! - [`batch`]: multi-record deletion and collection clearing
//! - [`sales`]: recording a sale against stock
//! - [`export`]: JSON and CSV export
//! - [`session`]: login flags kept in the store
//! - [`ui`]: formatting, notifications, navigation and rate limiting

pub mod batch;
pub mod db;
pub mod export;
pub mod models;
pub mod query;
pub mod sales;
pub mod seed;
pub mod session;
pub mod stats;
pub mod store;
pub mod ui;
pub mod validation;

// Re-export commonly used types
pub use db::Database;
pub use export::ExportFile;
pub use models::{FieldValue, Medicine, Record, Sale, StorageKey, Supplier};
pub use query::SortOrder;
pub use stats::{MedicineStatistics, SalesStatistics};
pub use store::{KeyValueStore, MemoryStore, RecordStore, StoreError};
pub use validation::ValidationResult;

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum PharmacyError {
    /// The requested storage key holds no data.
    #[error("No data found for '{0}'")]
    MissingData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PharmacyError>;
