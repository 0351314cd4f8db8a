use crate::models::{AuthSession, Material, NewMaterial, Notebook, User};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
    Validation,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized(message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: message.unwrap_or_else(|| "Unauthorized".to_string()),
        }
    }

    fn http(status: reqwest::StatusCode, message: String) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{message} ({status})"),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: message.into(),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub supabase_url: String,
    pub anon_key: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let mut cfg = Self {
            supabase_url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
        };

        // Both `window.ENV.SUPABASE_URL` and `window.ENV.supabase_url` are accepted.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    let read = |keys: [&str; 2]| {
                        keys.iter().find_map(|k| {
                            js_sys::Reflect::get(&env, &wasm_bindgen::JsValue::from_str(k))
                                .ok()
                                .and_then(|v| v.as_string())
                        })
                    };

                    if let Some(url) = read(["SUPABASE_URL", "supabase_url"]) {
                        cfg.supabase_url = url.trim_end_matches('/').to_string();
                    }
                    if let Some(key) = read(["SUPABASE_ANON_KEY", "supabase_anon_key"]) {
                        cfg.anon_key = key;
                    }
                }
            }
        }

        cfg
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct PasswordGrantRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RefreshGrantRequest {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl TokenResponse {
    pub fn into_session(self, now_secs: i64) -> AuthSession {
        AuthSession {
            expires_at: self
                .expires_at
                .unwrap_or_else(|| now_secs.saturating_add(self.expires_in)),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user: self.user,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct NewNotebookRow {
    pub name: String,
    pub user_id: String,
    pub last_accessed: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct NewMaterialRow {
    pub notebook_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: Option<String>,
    pub content: Option<String>,
}

/// Outcome of a sign-up call.
///
/// With email confirmation enabled the backend returns a bare user and no
/// tokens; otherwise it signs the user in immediately.
#[derive(Clone, Debug)]
pub(crate) enum SignUpOutcome {
    SignedIn(TokenResponse),
    ConfirmationSent,
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) anon_key: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            base_url,
            anon_key,
            token: None,
        }
    }

    pub fn from_env() -> Self {
        let cfg = EnvConfig::new();
        Self::new(cfg.supabase_url, cfg.anon_key)
    }

    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            token,
            ..self.clone()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn get_auth_header(&self) -> String {
        // PostgREST treats the anon key as the bearer when there is no user token.
        format!(
            "Bearer {}",
            self.token.as_deref().unwrap_or(self.anon_key.as_str())
        )
    }

    async fn request_api<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
        return_representation: bool,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header("Authorization", self.get_auth_header());

        if return_representation {
            req = req.header("Prefer", "return=representation");
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();

        if status.is_success() {
            // Some endpoints (logout) answer 204 with an empty body.
            let text = res.text().await.map_err(ApiError::network)?;
            let text = if text.trim().is_empty() { "null" } else { text.as_str() };
            serde_json::from_str(text).map_err(ApiError::parse)
        } else {
            let body = res.text().await.unwrap_or_default();
            let message = parse_error_message(&body);
            if status.as_u16() == 401 {
                Err(ApiError::unauthorized(message))
            } else {
                Err(ApiError::http(
                    status,
                    message.unwrap_or_else(|| "Request failed".to_string()),
                ))
            }
        }
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<TokenResponse> {
        self.request_api(
            Method::POST,
            "/auth/v1/token?grant_type=password",
            Some(&PasswordGrantRequest {
                email: email.to_string(),
                password: password.to_string(),
            }),
            false,
        )
        .await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> ApiResult<TokenResponse> {
        self.request_api(
            Method::POST,
            "/auth/v1/token?grant_type=refresh_token",
            Some(&RefreshGrantRequest {
                refresh_token: refresh_token.to_string(),
            }),
            false,
        )
        .await
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_url: &str,
    ) -> ApiResult<SignUpOutcome> {
        let data: serde_json::Value = self
            .request_api(
                Method::POST,
                &format!(
                    "/auth/v1/signup?redirect_to={}",
                    urlencoding::encode(redirect_url)
                ),
                Some(&PasswordGrantRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                }),
                false,
            )
            .await?;
        Ok(parse_sign_up_response(data))
    }

    pub async fn sign_out(&self) -> ApiResult<()> {
        let _: serde_json::Value = self
            .request_api(
                Method::POST,
                "/auth/v1/logout",
                Option::<&()>::None,
                false,
            )
            .await?;
        Ok(())
    }

    pub async fn get_user(&self) -> ApiResult<User> {
        if !self.is_authenticated() {
            return Err(ApiError::unauthorized(None));
        }
        self.request_api(Method::GET, "/auth/v1/user", Option::<&()>::None, false)
            .await
    }

    /// URL the browser is sent to for a third-party sign-in.
    pub fn authorize_url(&self, provider: &str, redirect_url: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={}&redirect_to={}",
            self.base_url,
            urlencoding::encode(provider),
            urlencoding::encode(redirect_url)
        )
    }

    pub async fn list_notebooks(&self, user_id: &str) -> ApiResult<Vec<Notebook>> {
        let data: serde_json::Value = self
            .request_api(
                Method::GET,
                &format!(
                    "/rest/v1/notebooks?select=*&user_id=eq.{}&order=last_accessed.desc",
                    urlencoding::encode(user_id)
                ),
                Option::<&()>::None,
                false,
            )
            .await?;
        Ok(parse_notebook_rows(data))
    }

    pub async fn list_materials(&self, notebook_id: &str) -> ApiResult<Vec<Material>> {
        let data: serde_json::Value = self
            .request_api(
                Method::GET,
                &format!(
                    "/rest/v1/materials?select=*&notebook_id=eq.{}&order=created_at.asc",
                    urlencoding::encode(notebook_id)
                ),
                Option::<&()>::None,
                false,
            )
            .await?;
        Ok(parse_material_rows(data))
    }

    pub async fn insert_notebook(
        &self,
        user_id: &str,
        name: &str,
        now_iso: &str,
    ) -> ApiResult<Notebook> {
        let data: serde_json::Value = self
            .request_api(
                Method::POST,
                "/rest/v1/notebooks",
                Some(&NewNotebookRow {
                    name: name.to_string(),
                    user_id: user_id.to_string(),
                    last_accessed: now_iso.to_string(),
                }),
                true,
            )
            .await?;

        parse_notebook_rows(data)
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::parse("Create notebook succeeded but returned no row"))
    }

    pub async fn insert_material(
        &self,
        notebook_id: &str,
        material: &NewMaterial,
    ) -> ApiResult<Material> {
        let data: serde_json::Value = self
            .request_api(
                Method::POST,
                "/rest/v1/materials",
                Some(&NewMaterialRow {
                    notebook_id: notebook_id.to_string(),
                    kind: material.kind.to_string(),
                    name: material.name.clone(),
                    url: material.url.clone(),
                    content: material.content.clone(),
                }),
                true,
            )
            .await?;

        parse_material_rows(data)
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::parse("Add material succeeded but returned no row"))
    }
}

/// GoTrue and PostgREST use different error shapes; take the first message found.
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
        .map(|s| s.to_string())
}

pub(crate) fn parse_sign_up_response(data: serde_json::Value) -> SignUpOutcome {
    match serde_json::from_value::<TokenResponse>(data) {
        Ok(tokens) => SignUpOutcome::SignedIn(tokens),
        Err(_) => SignUpOutcome::ConfirmationSent,
    }
}

/// Rows missing an id or name are dropped rather than failing the whole list.
pub(crate) fn parse_notebook_rows(data: serde_json::Value) -> Vec<Notebook> {
    let rows = match data {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(_) => vec![data],
        _ => return vec![],
    };

    rows.into_iter()
        .filter_map(|row| serde_json::from_value::<Notebook>(row).ok())
        .filter(|nb| !nb.id.trim().is_empty() && !nb.name.trim().is_empty())
        .map(|mut nb| {
            nb.materials.clear();
            nb
        })
        .collect()
}

pub(crate) fn parse_material_rows(data: serde_json::Value) -> Vec<Material> {
    let rows = match data {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(_) => vec![data],
        _ => return vec![],
    };

    rows.into_iter()
        .filter_map(|row| serde_json::from_value::<Material>(row).ok())
        .filter(|m| !m.id.trim().is_empty() && !m.notebook_id.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialKind;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:54321".to_string(), "anon".to_string());
        assert_eq!(client.base_url, "http://localhost:54321");
        assert!(client.token.is_none());
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_api_client_auth_header_falls_back_to_anon_key() {
        let client = ApiClient::new("http://x".to_string(), "anon".to_string());
        assert_eq!(client.get_auth_header(), "Bearer anon");

        let authed = client.with_token(Some("jwt".to_string()));
        assert_eq!(authed.get_auth_header(), "Bearer jwt");
        assert!(authed.is_authenticated());
        assert_eq!(authed.anon_key, "anon");
    }

    #[test]
    fn test_authorize_url_encodes_redirect() {
        let client = ApiClient::new("http://x".to_string(), String::new());
        let url = client.authorize_url("google", "http://localhost:8080/");
        assert_eq!(
            url,
            "http://x/auth/v1/authorize?provider=google&redirect_to=http%3A%2F%2Flocalhost%3A8080%2F"
        );
    }

    #[test]
    fn test_token_response_into_session_uses_expires_in_when_missing_expires_at() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": {"id": "u1", "email": "a@b.com", "aud": "authenticated"}
        }"#;
        let tokens: TokenResponse = serde_json::from_str(json).expect("token response should parse");
        let session = tokens.into_session(1_000);
        assert_eq!(session.expires_at, 4_600);
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.user.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_token_response_huge_expires_in_saturates() {
        let json = r#"{
            "access_token": "jwt",
            "expires_in": 9223372036854775807,
            "refresh_token": "r1",
            "user": {"id": "u1"}
        }"#;
        let tokens: TokenResponse = serde_json::from_str(json).expect("token response should parse");
        assert_eq!(tokens.into_session(1_000).expires_at, i64::MAX);
    }

    #[test]
    fn test_sign_up_response_without_tokens_means_confirmation() {
        let data = serde_json::json!({"id": "u1", "email": "a@b.com", "confirmation_sent_at": "x"});
        assert!(matches!(
            parse_sign_up_response(data),
            SignUpOutcome::ConfirmationSent
        ));
    }

    #[test]
    fn test_sign_up_response_with_tokens_signs_in() {
        let data = serde_json::json!({
            "access_token": "jwt",
            "refresh_token": "r",
            "expires_in": 60,
            "user": {"id": "u1"}
        });
        assert!(matches!(
            parse_sign_up_response(data),
            SignUpOutcome::SignedIn(_)
        ));
    }

    #[test]
    fn test_parse_error_message_shapes() {
        assert_eq!(
            parse_error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(
            parse_error_message(r#"{"code":"23505","message":"duplicate key"}"#).as_deref(),
            Some("duplicate key")
        );
        assert!(parse_error_message("<html>bad gateway</html>").is_none());
    }

    #[test]
    fn test_parse_notebook_rows_drops_invalid_rows() {
        let data = serde_json::json!([
            {"id": "n1", "name": "Biology", "user_id": "u1", "last_accessed": "2024-02-01T00:00:00Z",
             "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"},
            {"id": "", "name": "Ghost"},
            {"name": "No id"},
            {"id": "n2", "name": "Chemistry"}
        ]);
        let notebooks = parse_notebook_rows(data);
        assert_eq!(notebooks.len(), 2);
        assert_eq!(notebooks[0].name, "Biology");
        assert_eq!(notebooks[1].id, "n2");
        assert!(notebooks[1].last_accessed.is_empty());
    }

    #[test]
    fn test_parse_notebook_rows_accepts_single_object() {
        let data = serde_json::json!({"id": "n1", "name": "Biology"});
        assert_eq!(parse_notebook_rows(data).len(), 1);
        assert!(parse_notebook_rows(serde_json::Value::Null).is_empty());
    }

    #[test]
    fn test_parse_material_rows_rejects_unknown_kind() {
        let data = serde_json::json!([
            {"id": "m1", "notebook_id": "n1", "type": "pdf", "name": "a.pdf"},
            {"id": "m2", "notebook_id": "n1", "type": "video", "name": "clip"},
            {"id": "m3", "notebook_id": "", "type": "note", "name": "orphan"}
        ]);
        let materials = parse_material_rows(data);
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].kind, MaterialKind::Pdf);
    }

    #[test]
    fn test_new_material_row_serializes_type_column() {
        let row = NewMaterialRow {
            notebook_id: "n1".to_string(),
            kind: MaterialKind::Link.to_string(),
            name: "Docs".to_string(),
            url: Some("https://example.com".to_string()),
            content: None,
        };
        let v = serde_json::to_value(row).expect("should serialize");
        assert_eq!(v["type"], "link");
        assert_eq!(v["notebook_id"], "n1");
        assert!(v["content"].is_null());
    }

    #[test]
    fn test_api_error_display_is_message() {
        let e = ApiError::validation("Notebook name is required");
        assert_eq!(e.to_string(), "Notebook name is required");
        assert_eq!(e.kind, ApiErrorKind::Validation);
    }
}
