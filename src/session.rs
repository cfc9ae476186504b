//! Session persistence.
//!
//! A `Session` is the identity and bearer tokens granted by a
//! successful login. It is stored as four independent `localStorage`
//! entries so it survives a full page reload, and read back
//! all-or-nothing: if any entry is missing the whole session is
//! treated as absent.
//!
//! The store is injected via context as `Arc<dyn SessionStore>` rather
//! than reached for as a global, so tests substitute the in-memory
//! implementation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::RwLock;

use crate::net::types::LoginResponse;

const KEY_ACCESS_TOKEN: &str = "access_token";
const KEY_REFRESH_TOKEN: &str = "refresh_token";
const KEY_USER_ID: &str = "user_id";
const KEY_USERNAME: &str = "username";

/// Authenticated identity and tokens held by the client after login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            user_id: response.user_id,
            username: response.username,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Persistence contract for the current session.
///
/// `get` returns `None` if any required entry is missing, so a partial
/// write never surfaces as a half-populated session.
pub trait SessionStore: Send + Sync {
    fn set(&self, session: &Session);
    fn get(&self) -> Option<Session>;
    fn clear(&self);
}

/// Session store backed by the browser's `localStorage`.
///
/// Inert outside the browser: `set`/`clear` are no-ops and `get`
/// returns `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn set(&self, session: &Session) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(KEY_ACCESS_TOKEN, &session.access_token);
                let _ = storage.set_item(KEY_REFRESH_TOKEN, &session.refresh_token);
                let _ = storage.set_item(KEY_USER_ID, &session.user_id);
                let _ = storage.set_item(KEY_USERNAME, &session.username);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
        }
    }

    fn get(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            let read = |key: &str| storage.get_item(key).ok().flatten();
            Some(Session {
                user_id: read(KEY_USER_ID)?,
                username: read(KEY_USERNAME)?,
                access_token: read(KEY_ACCESS_TOKEN)?,
                refresh_token: read(KEY_REFRESH_TOKEN)?,
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                for key in [KEY_ACCESS_TOKEN, KEY_REFRESH_TOKEN, KEY_USER_ID, KEY_USERNAME] {
                    let _ = storage.remove_item(key);
                }
            }
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// In-memory session store with the same key contract as the browser
/// store. Used in tests, including partial-write scenarios.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single raw entry, bypassing the all-or-nothing `set`.
    pub fn set_raw(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    /// Read a single raw entry.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, session: &Session) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(KEY_ACCESS_TOKEN.to_owned(), session.access_token.clone());
            entries.insert(KEY_REFRESH_TOKEN.to_owned(), session.refresh_token.clone());
            entries.insert(KEY_USER_ID.to_owned(), session.user_id.clone());
            entries.insert(KEY_USERNAME.to_owned(), session.username.clone());
        }
    }

    fn get(&self) -> Option<Session> {
        let entries = self.entries.read().ok()?;
        Some(Session {
            user_id: entries.get(KEY_USER_ID)?.clone(),
            username: entries.get(KEY_USERNAME)?.clone(),
            access_token: entries.get(KEY_ACCESS_TOKEN)?.clone(),
            refresh_token: entries.get(KEY_REFRESH_TOKEN)?.clone(),
        })
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            for key in [KEY_ACCESS_TOKEN, KEY_REFRESH_TOKEN, KEY_USER_ID, KEY_USERNAME] {
                entries.remove(key);
            }
        }
    }
}

/// Display label for the protected view: the stored username, or a
/// generic label when no session is present.
pub fn display_name(session: Option<&Session>) -> &str {
    session.map_or("Guest", |s| s.username.as_str())
}
