//! # Persistent Store
//!
//! Keeps a JSON snapshot of the expense list under a single storage key.
//! The snapshot is never the authoritative copy: the repository owns the
//! list and overwrites the snapshot in full after every change.
//!
//! Storage itself sits behind [`StorageBackend`], so the browser's
//! `localStorage` and the in-memory backend used by tests are interchangeable.

use crate::{Expense, StoreError};
use log::{debug, warn};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value storage, shaped after the Web Storage API
pub trait StorageBackend {
    /// Read the value under `key`, `None` if the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Process-local storage backend.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, the way a full `localStorage` does
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Backend("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serializes the expense list to and from one storage key
pub struct ExpenseStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> ExpenseStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the snapshot.
    ///
    /// An absent key, an unreadable backend and a snapshot that is not a JSON
    /// array all load as an empty list. Inside the array each record is read
    /// on its own; records that do not parse are skipped with a warning and
    /// the rest still load.
    pub fn load(&self) -> Vec<Expense> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No snapshot under '{}', starting empty", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!("Could not read snapshot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Discarding corrupt snapshot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        let total = records.len();
        let expenses: Vec<Expense> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Expense>(record) {
                Ok(expense) => Some(expense),
                Err(e) => {
                    warn!("Skipping record {} in '{}': {}", index, self.key, e);
                    None
                }
            })
            .collect();

        debug!("Loaded {} of {} expenses from '{}'", expenses.len(), total, self.key);
        expenses
    }

    /// Overwrite the snapshot with `expenses`. Last writer wins.
    pub fn save(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        let json = serde_json::to_string(expenses)?;
        self.backend.set_item(&self.key, &json)?;
        debug!("Saved {} expenses to '{}'", expenses.len(), self.key);
        Ok(())
    }

    /// Raw snapshot text, `None` if nothing has been saved
    pub fn snapshot(&self) -> Result<Option<String>, StoreError> {
        self.backend.get_item(&self.key)
    }
}
