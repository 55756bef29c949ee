//! Token storage for the access/refresh credential pair.
//!
//! The browser implementation persists both tokens in `localStorage` under
//! fixed keys so a page reload keeps the session alive. Token contents are
//! opaque strings; nothing here inspects or validates them. Absence is
//! `None`, never an error.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

/// Storage key for the short-lived bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the long-lived refresh credential.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Synchronous key-value persistence for the two session tokens.
///
/// Only the HTTP client and the auth service touch a `TokenStore`; UI code
/// goes through `auth::session` instead.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn clear_access_token(&self);

    fn refresh_token(&self) -> Option<String>;
    fn set_refresh_token(&self, token: &str);
    fn clear_refresh_token(&self);

    /// Persist both tokens together. Login, registration and refresh always
    /// write the pair atomically from the caller's point of view.
    fn store_pair(&self, access: &str, refresh: &str) {
        self.set_access_token(access);
        self.set_refresh_token(refresh);
    }

    /// Remove both tokens. Used on logout and on irrecoverable refresh
    /// failure so `is_authenticated` reflects the logged-out state.
    fn clear(&self) {
        self.clear_access_token();
        self.clear_refresh_token();
    }
}

/// `localStorage`-backed store. Inert outside the browser: reads return
/// `None` and writes are dropped, matching the SSR stubs elsewhere in the
/// crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn access_token(&self) -> Option<String> {
        read_item(ACCESS_TOKEN_KEY)
    }

    fn set_access_token(&self, token: &str) {
        write_item(ACCESS_TOKEN_KEY, token);
    }

    fn clear_access_token(&self) {
        delete_item(ACCESS_TOKEN_KEY);
    }

    fn refresh_token(&self) -> Option<String> {
        read_item(REFRESH_TOKEN_KEY)
    }

    fn set_refresh_token(&self, token: &str) {
        write_item(REFRESH_TOKEN_KEY, token);
    }

    fn clear_refresh_token(&self) {
        delete_item(REFRESH_TOKEN_KEY);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "hydrate")]
fn read_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(feature = "hydrate")]
fn write_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "hydrate")]
fn delete_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_item(_key: &str) -> Option<String> {
    None
}

#[cfg(not(feature = "hydrate"))]
fn write_item(_key: &str, _value: &str) {}

#[cfg(not(feature = "hydrate"))]
fn delete_item(_key: &str) {}

/// In-memory store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    access: std::cell::RefCell<Option<String>>,
    refresh: std::cell::RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store already holding a token pair.
    pub fn with_pair(access: &str, refresh: &str) -> Self {
        let store = Self::default();
        store.store_pair(access, refresh);
        store
    }
}

impl TokenStore for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn set_access_token(&self, token: &str) {
        *self.access.borrow_mut() = Some(token.to_owned());
    }

    fn clear_access_token(&self) {
        *self.access.borrow_mut() = None;
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn set_refresh_token(&self, token: &str) {
        *self.refresh.borrow_mut() = Some(token.to_owned());
    }

    fn clear_refresh_token(&self) {
        *self.refresh.borrow_mut() = None;
    }
}
