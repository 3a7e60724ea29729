//! Local storage
//!
//! Keys used by the web client and a [`TokenStore`] over
//! `window.localStorage`, so the shared session rules run unchanged in the
//! browser.

use almazara::pagination::DEFAULT_PAGE_SIZE;
use almazara::session::{Session, SessionError, TokenStore};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

const API_URL_KEY: &str = "almazara_api_url";
const SESSION_KEY: &str = "almazara_session";
const PAGE_SIZE_KEY: &str = "almazara_page_size";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            web_sys::console::warn_1(&format!("Cannot store {}: {:?}", key, e).into());
        }
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = get_item(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    set_item(API_URL_KEY, url.trim());
}

/// Rows per table page
pub fn get_page_size() -> usize {
    get_item(PAGE_SIZE_KEY)
        .and_then(|v| v.parse().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

pub fn set_page_size(size: usize) {
    set_item(PAGE_SIZE_KEY, &size.to_string());
}

/// Session kept as JSON under `almazara_session`
pub struct LocalStorageStore;

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let storage = local_storage()
            .ok_or_else(|| SessionError::Storage("local storage unavailable".to_string()))?;
        let raw = storage
            .get_item(SESSION_KEY)
            .map_err(|_| SessionError::Storage("cannot read local storage".to_string()))?;
        match raw {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| SessionError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let storage = local_storage()
            .ok_or_else(|| SessionError::Storage("local storage unavailable".to_string()))?;
        let json =
            serde_json::to_string(session).map_err(|e| SessionError::Storage(e.to_string()))?;
        storage
            .set_item(SESSION_KEY, &json)
            .map_err(|_| SessionError::Storage("cannot write local storage".to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Some(storage) = local_storage() {
            storage
                .remove_item(SESSION_KEY)
                .map_err(|_| SessionError::Storage("cannot write local storage".to_string()))?;
        }
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use almazara::model::{RoleKind, User};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_survives_in_local_storage() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            email: None,
            role_id: None,
            role: None,
        };
        let session = Session::new("tok", user, Some(RoleKind::Admin), 1_000);

        LocalStorageStore.save(&session).unwrap();
        assert_eq!(LocalStorageStore.load().unwrap(), Some(session));

        LocalStorageStore.clear().unwrap();
        assert_eq!(LocalStorageStore.load().unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_api_base_is_normalized() {
        set_api_base("http://mill.local/api/ ");
        assert_eq!(get_api_base(), "http://mill.local/api");
        set_api_base(DEFAULT_API_BASE);
    }
}
