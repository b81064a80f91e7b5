//! SQLite schema for the local key-value store.

pub const SCHEMA: &str = r#"
-- ============================================================================
-- Local Storage
-- ============================================================================

-- One row per key; value holds the JSON text written by the caller
CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
