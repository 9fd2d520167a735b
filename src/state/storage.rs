//! Durable storage for the remembered login.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the only code that touches the persisted session key.
//! The API client reads the bearer token through it on every call and the
//! session context writes through it on every identity change.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort: unavailable storage reads as "no session" and a
//! failed write is logged, never raised.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::SESSION_STORAGE_KEY;
use crate::net::types::User;

/// Minimal string key/value backend.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    /// Overwrite `key` in a single call. Returns `false` when the write failed.
    fn set_item(&self, key: &str, value: &str) -> bool;
    /// Returns `false` when the entry could not be removed.
    fn remove_item(&self, key: &str) -> bool;
}

/// Browser `window.localStorage`. A no-op outside the csr build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            browser_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            false
        }
    }

    fn remove_item(&self, key: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            browser_storage().is_some_and(|storage| storage.remove_item(key).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            false
        }
    }
}

/// Shared in-memory backend. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(key.to_owned(), value.to_owned());
                true
            }
            Err(_) => false,
        }
    }

    fn remove_item(&self, key: &str) -> bool {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.remove(key);
                true
            }
            Err(_) => false,
        }
    }
}

/// Typed view of the persisted session record.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
    key: &'static str,
}

impl<B: KeyValueStore> SessionStore<B> {
    /// Store under the standard [`SESSION_STORAGE_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, SESSION_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &'static str) -> Self {
        Self { backend, key }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Last remembered user, or `None` when absent or unreadable.
    pub fn read(&self) -> Option<User> {
        let raw = self.backend.get_item(self.key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring unreadable stored session: {e}");
                None
            }
        }
    }

    /// Bearer token of the remembered user, if any.
    pub fn token(&self) -> Option<String> {
        self.read().and_then(|user| user.token).filter(|token| !token.is_empty())
    }

    /// Replace the remembered user; `None` forgets it.
    pub fn write(&self, user: Option<&User>) {
        let Some(user) = user else {
            if !self.backend.remove_item(self.key) {
                log::warn!("failed to clear stored session under {}", self.key);
            }
            return;
        };
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize session: {e}");
                return;
            }
        };
        if !self.backend.set_item(self.key, &raw) {
            log::warn!("failed to persist session for user {}", user.id);
        }
    }
}
