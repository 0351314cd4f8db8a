use crate::auth::{AuthClient, AuthEvent};
use crate::models::{AuthSession, User};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Observable mirror of the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SessionState {
    pub user: Option<User>,
    pub loading: bool,

    /// Set once any provider push has been applied.
    pushed: bool,
}

impl SessionState {
    pub fn initial() -> Self {
        Self {
            user: None,
            loading: true,
            pushed: false,
        }
    }

    /// Result of the one-shot session request made at start-up.
    ///
    /// A push is never older than the one-shot fetch it races with, so a
    /// fetch landing after a push only clears `loading`.
    pub fn apply_fetch(&mut self, session: Option<&AuthSession>) {
        if !self.pushed {
            self.user = session.map(|s| s.user.clone());
        }
        self.loading = false;
    }

    pub fn apply_push(&mut self, event: AuthEvent, session: Option<&AuthSession>) {
        self.pushed = true;
        self.loading = false;
        self.user = match event {
            AuthEvent::SignedOut => None,
            AuthEvent::SignedIn | AuthEvent::TokenRefreshed => session.map(|s| s.user.clone()),
        };
    }
}

#[derive(Clone, Copy)]
pub(crate) struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::initial()),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Subscribes to the provider, then asks for the current session once.
    ///
    /// Must be called inside the owner that should hold the subscription; it is
    /// released when that owner is cleaned up.
    pub fn start(&self, auth: &AuthClient) {
        let state = self.state;

        let subscription = auth.on_auth_state_change(move |event, session| {
            log!("session: {event}");
            state.update(|s| s.apply_push(event, session.as_ref()));
        });
        on_cleanup(move || subscription.unsubscribe());

        let auth = auth.clone();
        spawn_local(async move {
            let session = auth.get_session().await;
            state.update(|s| s.apply_fetch(session.as_ref()));
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user_id: &str) -> AuthSession {
        AuthSession {
            access_token: format!("jwt-{user_id}"),
            refresh_token: "r".to_string(),
            expires_at: 0,
            user: User {
                id: user_id.to_string(),
                email: Some("a@b.com".to_string()),
            },
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let s = SessionState::initial();
        assert!(s.loading);
        assert!(s.user.is_none());
    }

    #[test]
    fn test_fetch_without_session_finishes_logged_out() {
        let mut s = SessionState::initial();
        s.apply_fetch(None);
        assert!(!s.loading);
        assert!(s.user.is_none());
    }

    #[test]
    fn test_fetch_after_push_does_not_flicker_to_logged_out() {
        let mut s = SessionState::initial();
        s.apply_push(AuthEvent::SignedIn, Some(&session("u1")));
        // One-shot fetch started before sign-in resolves late with no session.
        s.apply_fetch(None);
        assert!(!s.loading);
        assert_eq!(s.user.map(|u| u.id).as_deref(), Some("u1"));
    }

    #[test]
    fn test_push_after_fetch_wins() {
        let mut s = SessionState::initial();
        s.apply_fetch(Some(&session("u1")));
        s.apply_push(AuthEvent::SignedOut, None);
        assert!(s.user.is_none());

        s.apply_push(AuthEvent::SignedIn, Some(&session("u2")));
        assert_eq!(s.user.map(|u| u.id).as_deref(), Some("u2"));
    }

    #[test]
    fn test_token_refresh_keeps_user() {
        let mut s = SessionState::initial();
        s.apply_fetch(Some(&session("u1")));
        s.apply_push(AuthEvent::TokenRefreshed, Some(&session("u1")));
        assert_eq!(s.user.map(|u| u.id).as_deref(), Some("u1"));
        assert!(!s.loading);
    }

    #[test]
    fn test_sign_in_scenario_reports_user() {
        let mut s = SessionState::initial();
        s.apply_fetch(None);
        s.apply_push(AuthEvent::SignedIn, Some(&session("u1")));
        assert_eq!(s.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    }
}
