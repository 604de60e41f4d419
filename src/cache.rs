//! Advisory local mirror of the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver reads this mirror to render optimistically before the backend
//! answers, the sign-in flow writes it, and logout/failed verification purge it.
//! It is never trusted for decisions on its own.
//!
//! TRADE-OFFS
//! ==========
//! Writers are last-writer-wins with no versioning. The event loop is
//! single-threaded, so no locking is needed either.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::User;

/// Storage key holding the JSON-encoded [`User`].
pub const USER_CACHE_KEY: &str = "user";

/// String key/value persistence (browser `localStorage` or an in-memory map).
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`Storage`]; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed view over the `"user"` entry of a [`Storage`].
#[derive(Clone, Debug, Default)]
pub struct UserCache<S> {
    storage: S,
}

impl<S: Storage> UserCache<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the cached user. An undecodable record is purged and reported absent.
    pub fn load(&self) -> Option<User> {
        let raw = self.storage.get(USER_CACHE_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable cached user");
                self.storage.remove(USER_CACHE_KEY);
                None
            }
        }
    }

    pub fn store(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(USER_CACHE_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, user_id = user.id, "failed to encode cached user"),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(USER_CACHE_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
