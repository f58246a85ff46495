use super::utils::{Credentials, SignInOutcome};
use crate::{
    api::{ApiError, AuthClient, AuthErrorCode, AuthProvider, SignInResponse},
    router::LOGIN_REDIRECT_PATH,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignInRepository {
    client: Rc<AuthClient>,
}

impl SignInRepository {
    pub fn new_with_client(client: Rc<AuthClient>) -> Self {
        Self { client }
    }

    pub async fn sign_in_with_credentials(&self, credentials: Credentials) -> SignInOutcome {
        let result = self
            .client
            .sign_in_with_credentials(
                &credentials.email,
                &credentials.password,
                LOGIN_REDIRECT_PATH,
            )
            .await;
        match result {
            Ok(response) => classify(response),
            Err(err) => SignInOutcome::Failed(err),
        }
    }

    pub async fn sign_in_with_google(&self) -> Result<String, ApiError> {
        self.client
            .sign_in_with_provider(AuthProvider::Google, LOGIN_REDIRECT_PATH)
            .await
    }
}

fn classify(response: SignInResponse) -> SignInOutcome {
    match (response.error, response.url) {
        (Some(code), _) => match code.parse::<AuthErrorCode>() {
            Ok(known) => SignInOutcome::Rejected(known),
            Err(_) => SignInOutcome::Unrecognized(Some(code)),
        },
        (None, Some(url)) => SignInOutcome::Redirect(url),
        (None, None) => SignInOutcome::Unrecognized(None),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{VALID_EMAIL, VALID_PASSWORD};
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository_for(server: &MockServer) -> SignInRepository {
        SignInRepository::new_with_client(Rc::new(AuthClient::new_with_base_url(
            server.url("/api/auth"),
        )))
    }

    fn credentials() -> Credentials {
        Credentials {
            email: VALID_EMAIL.into(),
            password: VALID_PASSWORD.into(),
        }
    }

    fn mock_csrf(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/csrf");
            then.status(200).json_body(json!({ "csrfToken": "csrf-abc" }));
        });
    }

    #[tokio::test]
    async fn credentials_success_redirects_to_documents() {
        let server = MockServer::start_async().await;
        mock_csrf(&server);
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/callback/credentials")
                .body_contains("callbackUrl=%2Fdocuments");
            then.status(200).json_body(json!({ "url": "/documents" }));
        });

        let outcome = repository_for(&server)
            .sign_in_with_credentials(credentials())
            .await;
        assert_eq!(outcome, SignInOutcome::Redirect("/documents".into()));
    }

    #[tokio::test]
    async fn credentials_known_error_is_rejected() {
        let server = MockServer::start_async().await;
        mock_csrf(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/callback/credentials");
            then.status(401)
                .json_body(json!({ "url": "/signin?error=credentials-not-found" }));
        });

        let outcome = repository_for(&server)
            .sign_in_with_credentials(credentials())
            .await;
        assert_eq!(
            outcome,
            SignInOutcome::Rejected(AuthErrorCode::CredentialsNotFound)
        );
    }

    #[tokio::test]
    async fn credentials_unknown_error_is_unrecognized() {
        let server = MockServer::start_async().await;
        mock_csrf(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/callback/credentials");
            then.status(401)
                .json_body(json!({ "url": "/signin?error=CredentialsSignin" }));
        });

        let outcome = repository_for(&server)
            .sign_in_with_credentials(credentials())
            .await;
        assert_eq!(
            outcome,
            SignInOutcome::Unrecognized(Some("CredentialsSignin".into()))
        );
    }

    #[tokio::test]
    async fn transport_failure_never_escapes() {
        let repo = SignInRepository::new_with_client(Rc::new(AuthClient::new_with_base_url(
            "http://127.0.0.1:1/api/auth",
        )));

        let outcome = repo.sign_in_with_credentials(credentials()).await;
        assert!(matches!(outcome, SignInOutcome::Failed(ref err) if err.code == "REQUEST_FAILED"));
    }

    #[tokio::test]
    async fn google_sign_in_targets_documents_callback() {
        let server = MockServer::start_async().await;
        mock_csrf(&server);
        let google = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/signin/google")
                .body_contains("callbackUrl=%2Fdocuments");
            then.status(200)
                .json_body(json!({ "url": "https://accounts.google.com/o/oauth2/v2/auth" }));
        });

        let url = repository_for(&server).sign_in_with_google().await.unwrap();
        google.assert_async().await;
        assert_eq!(url, "https://accounts.google.com/o/oauth2/v2/auth");
    }
}
