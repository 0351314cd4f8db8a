use crate::models::AuthSession;
use serde::{Deserialize, Serialize};

pub(crate) const SESSION_KEY: &str = "learnai_auth_session";
pub(crate) const ACTIVE_NOTEBOOK_KEY: &str = "learnai_active_notebook_id";
pub(crate) const SIDEBAR_COLLAPSED_KEY: &str = "learnai_sidebar_collapsed";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn remove_from_storage(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub(crate) fn load_session_from_storage() -> Option<AuthSession> {
    load_json_from_storage(SESSION_KEY)
}

pub(crate) fn save_session_to_storage(session: &AuthSession) {
    save_json_to_storage(SESSION_KEY, session);
}

pub(crate) fn clear_session_storage() {
    remove_from_storage(SESSION_KEY);
    remove_from_storage(ACTIVE_NOTEBOOK_KEY);
}

pub(crate) fn load_active_notebook_id() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(ACTIVE_NOTEBOOK_KEY).ok().flatten())
        .filter(|id| !id.trim().is_empty())
}

pub(crate) fn save_active_notebook_id(id: Option<&str>) {
    match id {
        Some(id) => {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACTIVE_NOTEBOOK_KEY, id);
            }
        }
        None => remove_from_storage(ACTIVE_NOTEBOOK_KEY),
    }
}

pub(crate) fn load_sidebar_collapsed() -> bool {
    local_storage()
        .and_then(|s| s.get_item(SIDEBAR_COLLAPSED_KEY).ok().flatten())
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

pub(crate) fn save_sidebar_collapsed(collapsed: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SIDEBAR_COLLAPSED_KEY, if collapsed { "1" } else { "0" });
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::User;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_storage_roundtrip() {
        clear_session_storage();
        assert!(load_session_from_storage().is_none());

        let session = AuthSession {
            access_token: "jwt".to_string(),
            refresh_token: "r1".to_string(),
            expires_at: 42,
            user: User {
                id: "u1".to_string(),
                email: Some("a@b.com".to_string()),
            },
        };
        save_session_to_storage(&session);
        assert_eq!(load_session_from_storage(), Some(session));

        clear_session_storage();
        assert!(load_session_from_storage().is_none());
    }

    #[wasm_bindgen_test]
    fn test_active_notebook_id_roundtrip() {
        save_active_notebook_id(Some("n1"));
        assert_eq!(load_active_notebook_id().as_deref(), Some("n1"));

        save_active_notebook_id(None);
        assert!(load_active_notebook_id().is_none());
    }

    #[wasm_bindgen_test]
    fn test_sidebar_collapsed_roundtrip() {
        save_sidebar_collapsed(true);
        assert!(load_sidebar_collapsed());
        save_sidebar_collapsed(false);
        assert!(!load_sidebar_collapsed());
    }
}
