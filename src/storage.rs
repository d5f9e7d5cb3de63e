use log::warn;
use web_sys::Storage;

use crate::error::{window, UiError};

/// String key/value storage, implemented over the browser's Web Storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StorageScope {
    /// Lives as long as the browser tab.
    Session,
    /// Lives until the user clears site data.
    Local,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    pub fn session() -> Self {
        Self { scope: StorageScope::Session }
    }

    pub fn local() -> Self {
        Self { scope: StorageScope::Local }
    }

    fn backend(&self) -> Result<Storage, UiError> {
        let window = window()?;
        let storage = match self.scope {
            StorageScope::Session => window.session_storage()?,
            StorageScope::Local => window.local_storage()?,
        };
        storage.ok_or(UiError::StorageUnavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.backend()
            .ok()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let result = self
            .backend()
            .and_then(|storage| storage.set_item(key, value).map_err(UiError::from));
        if let Err(err) = result {
            warn!("Could not persist {}: {}", key, err);
        }
    }
}

/// A session-lifetime boolean that suppresses a one-time UI element once set.
pub struct DismissalFlag<S: KeyValueStore> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> DismissalFlag<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Any non-empty stored value counts as dismissed.
    pub fn is_dismissed(&self) -> bool {
        self.store
            .get(self.key)
            .map_or(false, |value| !value.is_empty())
    }

    pub fn dismiss(&self) {
        self.store.set(self.key, "true");
    }
}
