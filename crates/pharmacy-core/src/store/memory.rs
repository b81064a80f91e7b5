use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{KeyValueStore, StoreError, StoreResult};

/// In-memory key-value store.
///
/// Uses `RefCell` for interior mutability since access is single-threaded,
/// which lets [`KeyValueStore`] take `&self` everywhere.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    failing_key: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for exercising error paths.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make writes to `key` alone fail; `None` clears it.
    pub fn set_failing_key(&self, key: Option<&str>) {
        *self.failing_key.borrow_mut() = key.map(str::to_string);
    }

    /// Stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }

    fn check_writable(&self, key: &str) -> StoreResult<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StoreError::Backend("simulated write error".to_string()));
        }
        if self.failing_key.borrow().as_deref() == Some(key) {
            return Err(StoreError::Backend(format!("simulated write error on '{}'", key)));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_writable(key)?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.check_writable(key)?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
