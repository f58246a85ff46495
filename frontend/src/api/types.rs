use serde::{Deserialize, Serialize};

/// Providers the authentication boundary knows how to sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Credentials,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Credentials => "credentials",
            AuthProvider::Google => "google",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

/// Form body posted to `callback/credentials`.
#[derive(Clone, Serialize)]
pub struct CredentialsSignInRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
    pub redirect: bool,
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
    pub json: bool,
}

/// Form body posted to `signin/{provider}`.
#[derive(Debug, Clone, Serialize)]
pub struct FederatedSignInRequest {
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirectResponse {
    #[serde(default)]
    pub url: Option<String>,
}

/// Result descriptor returned by a credential sign-in that did not redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInResponse {
    pub error: Option<String>,
    pub status: u16,
    pub ok: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }
}
