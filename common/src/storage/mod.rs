//! Durable key/value storage.
//!
//! Business logic never touches browser storage directly: it goes through
//! `KeyValueStore`, implemented over `localStorage` by the frontend and by
//! `MemoryStore` in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// Key holding the persisted analytics source scope.
pub const ANALYTICS_SOURCE_KEY: &str = "analytics_source";

/// Key holding the persisted analytics template identifier.
pub const ANALYTICS_TEMPLATE_ID_KEY: &str = "analytics_template_id";

/// Key holding the logged-in `SessionUser` JSON.
pub const SESSION_USER_KEY: &str = "auth_user";

/// Per-vendor key holding the `PreviewAuth` JSON.
pub fn preview_auth_key(vendor_id: &str) -> String {
    format!("preview_auth_{vendor_id}")
}

/// String key/value storage scoped to one origin.
///
/// Methods take `&self`: the browser store is ambient global state, so
/// implementations use interior mutability where they need it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read that folds every failure into "absent".
    fn get_or_absent(&self, key: &str) -> Option<String> {
        self.get(key).ok().flatten()
    }
}

/// In-memory store for tests and for environments without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    /// Every `set` call in order, including writes of an unchanged value.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl KeyValueStore for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn failed_reads_count_as_absent() {
        assert_eq!(Broken.get_or_absent(ANALYTICS_SOURCE_KEY), None);
    }

    #[test]
    fn memory_store_records_every_write() {
        let store = MemoryStore::with_entries([(ANALYTICS_TEMPLATE_ID_KEY, "t1")]);
        store.set(ANALYTICS_TEMPLATE_ID_KEY, "t1").unwrap();
        assert_eq!(store.get_or_absent(ANALYTICS_TEMPLATE_ID_KEY).as_deref(), Some("t1"));
        assert_eq!(store.writes().len(), 1);
    }

    #[test]
    fn preview_auth_keys_are_per_vendor() {
        assert_eq!(preview_auth_key("v42"), "preview_auth_v42");
    }
}
