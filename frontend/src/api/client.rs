use reqwest::{Client, RequestBuilder, Url};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_auth_base_url().await
        }
    }

    pub async fn csrf_token(&self) -> Result<String, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = with_browser_credentials(
            self.client.get(format!("{}/csrf", base_url)),
        )
        .send()
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::request_failed(format!(
                "CSRF token request failed with status {}",
                response.status()
            )));
        }
        let csrf: CsrfResponse = response
            .json()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))?;
        Ok(csrf.csrf_token)
    }

    /// Submits email/password to the credentials provider without letting the
    /// provider redirect, returning the result descriptor instead.
    pub async fn sign_in_with_credentials(
        &self,
        email: &str,
        password: &str,
        callback_url: &str,
    ) -> Result<SignInResponse, ApiError> {
        let csrf_token = self.csrf_token().await?;
        let base_url = self.resolved_base_url().await;
        let form = CredentialsSignInRequest {
            email: email.to_string(),
            password: password.to_string(),
            callback_url: callback_url.to_string(),
            redirect: false,
            csrf_token,
            json: true,
        };

        let response = with_browser_credentials(
            self.client
                .post(format!(
                    "{}/callback/{}",
                    base_url,
                    AuthProvider::Credentials.as_str()
                ))
                .form(&form),
        )
        .send()
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body: RedirectResponse = response
            .json()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))?;

        let error = body
            .url
            .as_deref()
            .and_then(|url| query_param(url, "error"))
            .filter(|code| !code.is_empty());
        let url = if error.is_some() { None } else { body.url };

        Ok(SignInResponse {
            error,
            status: status.as_u16(),
            ok: status.is_success(),
            url,
        })
    }

    /// Starts a federated sign-in and returns where the browser has to go next.
    pub async fn sign_in_with_provider(
        &self,
        provider: AuthProvider,
        callback_url: &str,
    ) -> Result<String, ApiError> {
        let csrf_token = self.csrf_token().await?;
        let base_url = self.resolved_base_url().await;
        let form = FederatedSignInRequest {
            callback_url: callback_url.to_string(),
            csrf_token,
            json: true,
        };

        let response = with_browser_credentials(
            self.client
                .post(format!("{}/signin/{}", base_url, provider.as_str()))
                .form(&form),
        )
        .send()
        .await
        .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let body: RedirectResponse = response
            .json()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))?;
        Ok(body.url.unwrap_or_else(|| callback_url.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_browser_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_browser_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

/// Reads a single percent-decoded query parameter out of an absolute or
/// relative URL.
pub(crate) fn query_param(url: &str, key: &str) -> Option<String> {
    let parsed = Url::parse(url)
        .or_else(|_| Url::parse("http://localhost").and_then(|base| base.join(url)))
        .ok()?;
    parsed
        .query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}
