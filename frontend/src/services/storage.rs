use anyhow::{Context, Result};
use shared::{MemoryStorage, StorageBackend, StoreError};
use web_sys::Storage;

use super::logging::Logger;

/// `window.localStorage` as a storage backend
pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    pub fn open() -> Result<Self> {
        let storage = local_storage().context("failed to open localStorage")?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}

fn local_storage() -> std::result::Result<Storage, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("no global window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("access was denied: {:?}", e)))?
        .ok_or_else(|| StoreError::Unavailable("not supported by this browser".to_string()))
}

/// Local storage when the browser allows it, otherwise an in-memory backend
/// so the app still works for the lifetime of the page
pub fn open_backend() -> Box<dyn StorageBackend> {
    match LocalStorageBackend::open() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            Logger::warn_with_component(
                "storage",
                &format!("{:#}; expenses will not survive a reload", e),
            );
            Box::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Category, ExpenseRepository, ExpenseStore, TrackerConfig};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let backend = LocalStorageBackend::open().unwrap();
        backend.set_item("expense-tracker-test", "[]").unwrap();

        let stored = backend.get_item("expense-tracker-test").unwrap();
        assert_eq!(stored.as_deref(), Some("[]"));
        assert_eq!(backend.get_item("expense-tracker-missing").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_local_storage_is_available() {
        assert!(local_storage().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_repository_survives_reload() {
        let key = "expense-tracker-reload-test";
        let config = TrackerConfig::default();
        let store = ExpenseStore::new(LocalStorageBackend::open().unwrap(), key);
        let mut repository = ExpenseRepository::load(store, &config);
        repository.reset();
        repository
            .add("Coffee", 3.5, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), Category::Food)
            .unwrap();

        let reopened = ExpenseStore::new(LocalStorageBackend::open().unwrap(), key);
        let reloaded = ExpenseRepository::load(reopened, &config);

        assert_eq!(reloaded.all(), repository.all());
    }
}
