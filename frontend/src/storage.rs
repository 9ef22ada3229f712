//! Browser `localStorage` access: builder drafts and the auth token.
//!
//! Reads and writes are unguarded; two tabs editing the same template simply
//! overwrite each other.

use common::storage::{KeyValueStore, StorageError};
use web_sys::Storage;

pub const AUTH_TOKEN_KEY: &str = "authToken";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `KeyValueStore` over `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: err
                .as_string()
                .unwrap_or_else(|| "quota exceeded or storage disabled".to_string()),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn auth_token() -> Option<String> {
    LocalStore.get(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn set_auth_token(token: &str) -> Result<(), StorageError> {
    LocalStore.set(AUTH_TOKEN_KEY, token)
}

pub fn clear_auth_token() {
    LocalStore.remove(AUTH_TOKEN_KEY);
}
