use web_sys::window;

use crate::config;

/// The session itself is owned by the auth flow; the welcome surface only
/// needs to know whether a token is present.
pub fn is_logged_in() -> bool {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(_token)) = storage.get_item(config::TOKEN_STORAGE_KEY) {
                return true;
            }
        }
    }
    false
}

pub fn logout() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(config::TOKEN_STORAGE_KEY);
            // Reload the page to reflect the logged out state
            let _ = window.location().reload();
        }
    }
}
