//! Durable storage for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state that outlives a tab. The session manager
//! reads it once at startup, writes it after login, and deletes it on logout
//! or when the backend stops accepting it. Nothing else touches it.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::Mutex;

/// Key-value slot holding at most one bearer token.
pub trait TokenStore {
    /// The stored token. Empty strings read as absent.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed token slot. A no-op outside the browser.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTokenStore {
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    key: &'static str,
}

impl BrowserTokenStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for BrowserTokenStore {
    fn default() -> Self {
        Self::new(crate::config::TOKEN_STORAGE_KEY)
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(self.key).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(self.key, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process token slot for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        slot.clone().and_then(non_empty)
    }

    fn save(&self, token: &str) {
        let mut slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(token.to_owned());
    }

    fn clear(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = None;
    }
}

fn non_empty(token: String) -> Option<String> {
    (!token.is_empty()).then_some(token)
}
