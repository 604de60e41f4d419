//! `localStorage`-backed [`Storage`] for the cached user mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core `UserCache` reads and writes through this. Outside the browser
//! (or with storage disabled) reads miss and writes are dropped, which the
//! cache treats as "nothing cached".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use careerconnect::cache::Storage;

/// The window's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
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

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage write for {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if let Err(e) = storage.remove_item(key) {
                log::warn!("localStorage remove for {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
