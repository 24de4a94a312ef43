//! `localStorage` behind the `KeyValueStore` interface.

use common::error::StorageError;
use common::storage::KeyValueStore;
use web_sys::Storage;

/// Stateless handle; every call resolves `window.localStorage` afresh since
/// access can be revoked at any time (private mode, quota, policy).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
