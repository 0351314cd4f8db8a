use crate::api::{ApiClient, ApiErrorKind, ApiResult, SignUpOutcome};
use crate::models::AuthSession;
use crate::storage::{clear_session_storage, load_session_from_storage, save_session_to_storage};
use crate::util::{cancel_schedule, now_secs, schedule};
use leptos::logging::{log, warn};
use leptos::task::spawn_local;
use std::sync::{Arc, Mutex};

/// Refresh this many seconds before the access token expires.
const REFRESH_MARGIN_SECS: i64 = 60;
const REFRESH_RETRY_SECS: i64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

type Listener = Arc<dyn Fn(AuthEvent, Option<AuthSession>) + Send + Sync>;

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl ListenerRegistry {
    pub fn add(&mut self, listener: Listener) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.listeners.push((self.next_id, listener));
        self.next_id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Listeners are cloned out so callbacks run without the lock held.
    pub fn snapshot(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, l)| l.clone()).collect()
    }
}

/// Handle returned by [`AuthClient::on_auth_state_change`]; dropping it unsubscribes.
pub(crate) struct AuthSubscription {
    id: u64,
    registry: Arc<Mutex<ListenerRegistry>>,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {}
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Ok(mut reg) = self.registry.lock() {
            reg.remove(self.id);
        }
    }
}

/// Tokens handed back in the URL fragment after a third-party sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FragmentAuth {
    Tokens {
        access_token: String,
        refresh_token: String,
        expires_at: i64,
    },
    Error(String),
}

pub(crate) fn parse_session_fragment(fragment: &str, now_secs: i64) -> Option<FragmentAuth> {
    let fragment = fragment.trim_start_matches('#');
    if fragment.is_empty() {
        return None;
    }

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut expires_at = None;
    let mut error = None;
    let mut error_description = None;

    for pair in fragment.split('&') {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        let v = urlencoding::decode(&v.replace('+', " "))
            .map(|c| c.into_owned())
            .unwrap_or_else(|_| v.to_string());
        match k {
            "access_token" => access_token = Some(v),
            "refresh_token" => refresh_token = Some(v),
            "expires_in" => expires_in = v.parse::<i64>().ok(),
            "expires_at" => expires_at = v.parse::<i64>().ok(),
            "error" => error = Some(v),
            "error_description" => error_description = Some(v),
            _ => {}
        }
    }

    if let Some(e) = error {
        return Some(FragmentAuth::Error(error_description.unwrap_or(e)));
    }

    match (access_token, refresh_token) {
        (Some(access_token), Some(refresh_token)) if !access_token.is_empty() => {
            Some(FragmentAuth::Tokens {
                access_token,
                refresh_token,
                expires_at: expires_at
                    .unwrap_or_else(|| now_secs.saturating_add(expires_in.unwrap_or(3600))),
            })
        }
        _ => None,
    }
}

pub(crate) fn refresh_delay_secs(session: &AuthSession, now_secs: i64) -> i64 {
    session
        .expires_at
        .saturating_sub(now_secs)
        .saturating_sub(REFRESH_MARGIN_SECS)
        .max(0)
}

/// Client-side identity provider backed by the GoTrue endpoints.
///
/// Owns the persisted session, pushes changes to subscribers, and keeps the
/// access token fresh with a single refresh timer.
#[derive(Clone)]
pub(crate) struct AuthClient {
    api: ApiClient,
    session: Arc<Mutex<Option<AuthSession>>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    refresh_timer_id: Arc<Mutex<Option<i32>>>,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            session: Arc::new(Mutex::new(None)),
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
            refresh_timer_id: Arc::new(Mutex::new(None)),
        }
    }

    pub fn current_session(&self) -> Option<AuthSession> {
        self.session.lock().ok().and_then(|s| s.clone())
    }

    /// Data-store client carrying the current access token, if any.
    pub fn data_client(&self) -> ApiClient {
        self.api
            .with_token(self.current_session().map(|s| s.access_token))
    }

    pub fn on_auth_state_change(
        &self,
        listener: impl Fn(AuthEvent, Option<AuthSession>) + Send + Sync + 'static,
    ) -> AuthSubscription {
        let id = self
            .listeners
            .lock()
            .map(|mut reg| reg.add(Arc::new(listener)))
            .unwrap_or(0);
        AuthSubscription {
            id,
            registry: self.listeners.clone(),
        }
    }

    fn emit(&self, event: AuthEvent, session: Option<AuthSession>) {
        let listeners = self
            .listeners
            .lock()
            .map(|reg| reg.snapshot())
            .unwrap_or_default();
        for l in listeners {
            l(event, session.clone());
        }
    }

    fn set_session(&self, session: Option<AuthSession>, event: AuthEvent) {
        if let Ok(mut s) = self.session.lock() {
            *s = session.clone();
        }

        self.clear_refresh_timer();
        match &session {
            Some(s) => {
                save_session_to_storage(s);
                self.schedule_refresh(refresh_delay_secs(s, now_secs()));
            }
            None => clear_session_storage(),
        }

        log!("auth: {event}");
        self.emit(event, session);
    }

    fn clear_refresh_timer(&self) {
        if let Ok(mut t) = self.refresh_timer_id.lock() {
            if let Some(id) = t.take() {
                cancel_schedule(id);
            }
        }
    }

    fn schedule_refresh(&self, delay_secs: i64) {
        let this = self.clone();
        let delay_ms = (delay_secs.clamp(0, i32::MAX as i64 / 1000) * 1000) as i32;
        let id = schedule(delay_ms, move || {
            spawn_local(async move {
                this.refresh().await;
            });
        });
        if let Ok(mut t) = self.refresh_timer_id.lock() {
            *t = id;
        }
    }

    async fn refresh(&self) {
        let Some(current) = self.current_session() else {
            return;
        };

        match self.api.refresh_session(&current.refresh_token).await {
            Ok(tokens) => {
                let mut next = tokens.into_session(now_secs());
                if next.user.id.is_empty() {
                    next.user = current.user;
                }
                self.set_session(Some(next), AuthEvent::TokenRefreshed);
            }
            Err(e) if e.kind == ApiErrorKind::Network => {
                warn!("auth: token refresh failed, retrying: {e}");
                self.clear_refresh_timer();
                self.schedule_refresh(REFRESH_RETRY_SECS);
            }
            Err(e) => {
                warn!("auth: refresh token rejected: {e}");
                self.set_session(None, AuthEvent::SignedOut);
            }
        }
    }

    /// Returns the current session, resolving it on first use from the URL
    /// fragment of an OAuth redirect or from storage (refreshing it if expired).
    pub async fn get_session(&self) -> Option<AuthSession> {
        if let Some(s) = self.current_session() {
            return Some(s);
        }

        if let Some(s) = self.take_session_from_url().await {
            return Some(s);
        }

        let stored = load_session_from_storage()?;
        if !stored.is_expired_at(now_secs()) {
            if let Ok(mut s) = self.session.lock() {
                *s = Some(stored.clone());
            }
            self.clear_refresh_timer();
            self.schedule_refresh(refresh_delay_secs(&stored, now_secs()));
            return Some(stored);
        }

        match self.api.refresh_session(&stored.refresh_token).await {
            Ok(tokens) => {
                let session = tokens.into_session(now_secs());
                self.set_session(Some(session.clone()), AuthEvent::TokenRefreshed);
                Some(session)
            }
            Err(e) => {
                warn!("auth: stored session expired and could not be refreshed: {e}");
                clear_session_storage();
                None
            }
        }
    }

    async fn take_session_from_url(&self) -> Option<AuthSession> {
        let window = web_sys::window()?;
        let location = window.location();
        let hash = location.hash().ok()?;

        let parsed = parse_session_fragment(&hash, now_secs())?;

        // Strip the tokens from the address bar either way.
        if let Ok(history) = window.history() {
            let path = format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            );
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }

        match parsed {
            FragmentAuth::Error(e) => {
                warn!("auth: provider redirect returned an error: {e}");
                None
            }
            FragmentAuth::Tokens {
                access_token,
                refresh_token,
                expires_at,
            } => {
                let user = match self
                    .api
                    .with_token(Some(access_token.clone()))
                    .get_user()
                    .await
                {
                    Ok(user) => user,
                    Err(e) => {
                        warn!("auth: could not load user for redirect session: {e}");
                        return None;
                    }
                };
                let session = AuthSession {
                    access_token,
                    refresh_token,
                    expires_at,
                    user,
                };
                self.set_session(Some(session.clone()), AuthEvent::SignedIn);
                Some(session)
            }
        }
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> ApiResult<()> {
        let tokens = self.api.sign_in_with_password(email, password).await?;
        self.set_session(Some(tokens.into_session(now_secs())), AuthEvent::SignedIn);
        Ok(())
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_url: &str,
    ) -> ApiResult<SignUpOutcome> {
        let outcome = self.api.sign_up(email, password, redirect_url).await?;
        if let SignUpOutcome::SignedIn(tokens) = &outcome {
            self.set_session(
                Some(tokens.clone().into_session(now_secs())),
                AuthEvent::SignedIn,
            );
        }
        Ok(outcome)
    }

    /// Leaves the app for the provider's consent screen.
    pub fn sign_in_with_oauth(&self, provider: &str, redirect_url: &str) -> ApiResult<()> {
        let url = self.api.authorize_url(provider, redirect_url);
        web_sys::window()
            .ok_or_else(|| crate::api::ApiError::validation("No browser window"))?
            .location()
            .set_href(&url)
            .map_err(|_| crate::api::ApiError::validation("Could not open the sign-in page"))
    }

    /// Clears the local session even when the backend call fails.
    pub async fn sign_out(&self) {
        let client = self.data_client();
        if client.is_authenticated() {
            if let Err(e) = client.sign_out().await {
                warn!("auth: remote sign-out failed: {e}");
            }
        }
        self.set_session(None, AuthEvent::SignedOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_listener_registry_add_remove() {
        let mut reg = ListenerRegistry::default();
        let a = reg.add(Arc::new(|_, _| {}));
        let b = reg.add(Arc::new(|_, _| {}));
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
        assert!(reg.remove(a));
        assert!(!reg.remove(a));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_subscription_drop_unsubscribes() {
        let client = AuthClient::new(ApiClient::new("http://x".to_string(), String::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        let c = calls.clone();
        let sub = client.on_auth_state_change(move |_, _| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        client.emit(AuthEvent::SignedOut, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sub.unsubscribe();
        client.emit(AuthEvent::SignedOut, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.listeners.lock().map(|r| r.len()).unwrap_or(99), 0);
    }

    #[test]
    fn test_emit_delivers_session_to_every_listener() {
        let client = AuthClient::new(ApiClient::new("http://x".to_string(), String::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s1 = seen.clone();
        let _a = client.on_auth_state_change(move |ev, s| {
            s1.lock().expect("lock").push((ev, s.map(|s| s.user.id)));
        });
        let s2 = seen.clone();
        let _b = client.on_auth_state_change(move |ev, s| {
            s2.lock().expect("lock").push((ev, s.map(|s| s.user.id)));
        });

        let session = AuthSession {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 10,
            user: User {
                id: "u1".to_string(),
                email: None,
            },
        };
        client.emit(AuthEvent::SignedIn, Some(session));

        let seen = seen.lock().expect("lock");
        assert_eq!(seen.len(), 2);
        assert!(seen
            .iter()
            .all(|(ev, id)| *ev == AuthEvent::SignedIn && id.as_deref() == Some("u1")));
    }

    #[test]
    fn test_parse_session_fragment_tokens() {
        let parsed = parse_session_fragment(
            "#access_token=abc&expires_in=3600&refresh_token=r%2B1&token_type=bearer",
            1_000,
        );
        assert_eq!(
            parsed,
            Some(FragmentAuth::Tokens {
                access_token: "abc".to_string(),
                refresh_token: "r+1".to_string(),
                expires_at: 4_600,
            })
        );
    }

    #[test]
    fn test_parse_session_fragment_prefers_expires_at() {
        let parsed = parse_session_fragment("access_token=a&refresh_token=r&expires_at=99&expires_in=5", 0);
        assert!(matches!(parsed, Some(FragmentAuth::Tokens { expires_at: 99, .. })));
    }

    #[test]
    fn test_parse_session_fragment_error_and_noise() {
        assert_eq!(
            parse_session_fragment("#error=access_denied&error_description=User+denied+access", 0),
            Some(FragmentAuth::Error("User denied access".to_string()))
        );
        assert_eq!(parse_session_fragment("", 0), None);
        assert_eq!(parse_session_fragment("#section-2", 0), None);
        assert_eq!(parse_session_fragment("#access_token=a", 0), None);
    }

    #[test]
    fn test_refresh_delay_secs() {
        let session = AuthSession {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 1_000 + 3_600,
            user: User {
                id: "u1".to_string(),
                email: None,
            },
        };
        assert_eq!(refresh_delay_secs(&session, 1_000), 3_540);
        assert_eq!(refresh_delay_secs(&session, 10_000), 0);
    }

    #[test]
    fn test_extreme_expiry_values_saturate() {
        let parsed = parse_session_fragment(
            "access_token=a&refresh_token=r&expires_in=9223372036854775807",
            1_700_000_000,
        );
        assert_eq!(
            parsed,
            Some(FragmentAuth::Tokens {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
                expires_at: i64::MAX,
            })
        );

        let mut session = AuthSession {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: i64::MIN,
            user: User {
                id: "u1".to_string(),
                email: None,
            },
        };
        assert_eq!(refresh_delay_secs(&session, 1_000), 0);

        session.expires_at = i64::MAX;
        assert_eq!(refresh_delay_secs(&session, i64::MIN), i64::MAX - REFRESH_MARGIN_SECS);
    }
}
