//! Key-value operations on the `local_storage` table.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};

const UPSERT: &str = r#"
    INSERT INTO local_storage (key, value, updated_at)
    VALUES (?1, ?2, datetime('now'))
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = datetime('now')
"#;

impl Database {
    /// Read the raw value stored under `key`.
    pub fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or replace the value under `key`.
    pub fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(UPSERT, params![key, value])?;
        Ok(())
    }

    /// Write several values in one transaction; either all land or none do.
    pub fn set_items(&self, entries: &[(&str, &str)]) -> DbResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for (key, value) in entries {
            tx.execute(UPSERT, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Remove `key`. Returns whether a row was deleted.
    pub fn remove_item(&self, key: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM local_storage WHERE key = ?", [key])?;
        Ok(rows_affected > 0)
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> DbResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_item("medicines").unwrap(), None);

        db.set_item("medicines", "[]").unwrap();
        assert_eq!(db.get_item("medicines").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.set_item("sales", "[1]").unwrap();
        db.set_item("sales", "[2]").unwrap();

        assert_eq!(db.get_item("sales").unwrap().as_deref(), Some("[2]"));
        assert_eq!(db.keys().unwrap(), vec!["sales".to_string()]);
    }

    #[test]
    fn test_set_items_is_atomic() {
        let db = Database::open_in_memory().unwrap();
        db.set_item("medicines", "[1]").unwrap();
        db.conn()
            .execute_batch(
                "CREATE TRIGGER reject_sales BEFORE INSERT ON local_storage
                 WHEN NEW.key = 'sales'
                 BEGIN SELECT RAISE(ABORT, 'sales are read-only'); END;",
            )
            .unwrap();

        assert!(db.set_items(&[("medicines", "[2]"), ("sales", "[]")]).is_err());
        assert_eq!(db.get_item("medicines").unwrap().as_deref(), Some("[1]"));
        assert_eq!(db.get_item("sales").unwrap(), None);

        db.set_items(&[("medicines", "[3]"), ("suppliers", "[]")]).unwrap();
        assert_eq!(db.get_item("medicines").unwrap().as_deref(), Some("[3]"));
        assert_eq!(db.get_item("suppliers").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove() {
        let db = Database::open_in_memory().unwrap();
        db.set_item("suppliers", "[]").unwrap();

        assert!(db.remove_item("suppliers").unwrap());
        assert!(!db.remove_item("suppliers").unwrap());
        assert_eq!(db.get_item("suppliers").unwrap(), None);
    }
}
