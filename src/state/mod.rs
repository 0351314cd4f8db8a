use crate::api::ApiClient;
use crate::auth::AuthClient;
use crate::notebooks::NotebookStore;
use crate::session::SessionStore;
use crate::storage::load_sidebar_collapsed;
use crate::toast::Toasts;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Identity provider; cloned out for async work.
    pub auth: StoredValue<AuthClient>,
    pub session: SessionStore,
    pub notebooks: NotebookStore,
    pub toasts: Toasts,

    /// Global UI state.
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: StoredValue::new(AuthClient::new(ApiClient::from_env())),
            session: SessionStore::new(),
            notebooks: NotebookStore::new(),
            toasts: Toasts::new(),
            sidebar_collapsed: RwSignal::new(load_sidebar_collapsed()),
        }
    }

    pub fn auth(&self) -> AuthClient {
        self.auth.get_value()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
