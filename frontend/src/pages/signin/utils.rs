use std::borrow::Cow;
use std::fmt;

use leptos::*;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    api::{ApiError, AuthErrorCode},
    state::toast::{Toast, ToastVariant},
};

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 72;

pub const INVALID_EMAIL_MESSAGE: &str = "Endereço de e-mail inválido";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "A senha deve conter pelo menos 6 caracteres";
pub const PASSWORD_TOO_LONG_MESSAGE: &str = "A senha deve conter no máximo 72 caracteres";

pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "O e-mail ou senha fornecido está incorreto";
pub const SOCIAL_LOGIN_ACCOUNT_MESSAGE: &str =
    "Esta conta parece estar usando um método de login social. Faça login usando esse método";

pub const UNKNOWN_ERROR_TITLE: &str = "Ocorreu um erro desconhecido";
pub const UNKNOWN_ERROR_DESCRIPTION: &str =
    "Encontramos um erro desconhecido ao tentar fazer seu login. Por favor, tente novamente mais tarde.";

#[derive(Clone, Copy)]
pub struct SignInFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for SignInFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl SignInFormState {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        validate_credentials(&self.email.get_untracked(), &self.password.get_untracked())
    }
}

#[derive(Clone, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(email(message = "Endereço de e-mail inválido"))]
    pub email: String,
    #[validate(custom(function = "validate_password_length"))]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if length < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::new("password_too_short")
            .with_message(Cow::Borrowed(PASSWORD_TOO_SHORT_MESSAGE)));
    }
    if length > PASSWORD_MAX_LENGTH {
        return Err(ValidationError::new("password_too_long")
            .with_message(Cow::Borrowed(PASSWORD_TOO_LONG_MESSAGE)));
    }
    Ok(())
}

/// Field-scoped validation messages, rendered under their inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            let message = errs.first().map(|err| {
                err.message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            });
            match &*field {
                "email" => fields.email = message,
                "password" => fields.password = message,
                _ => {}
            }
        }
        fields
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let credentials = Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    match credentials.validate() {
        Ok(()) => Ok(credentials),
        Err(errors) => Err(FieldErrors::from(&errors)),
    }
}

/// Everything a credential submit can end in.
#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    Redirect(String),
    Rejected(AuthErrorCode),
    Unrecognized(Option<String>),
    Failed(ApiError),
}

/// What the form does once a submit settles.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitEffect {
    Navigate(String),
    Notify(Toast),
}

pub fn error_message(code: AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::CredentialsNotFound | AuthErrorCode::IncorrectEmailPassword => {
            INCORRECT_CREDENTIALS_MESSAGE
        }
        AuthErrorCode::UserMissingPassword => SOCIAL_LOGIN_ACCOUNT_MESSAGE,
    }
}

pub fn unknown_error_toast(variant: ToastVariant) -> Toast {
    Toast::new(UNKNOWN_ERROR_DESCRIPTION)
        .with_title(UNKNOWN_ERROR_TITLE)
        .with_variant(variant)
}

pub fn interpret(outcome: SignInOutcome) -> SubmitEffect {
    match outcome {
        SignInOutcome::Redirect(url) => SubmitEffect::Navigate(url),
        SignInOutcome::Rejected(code) => {
            log::warn!("Sign-in rejected: {}", code);
            SubmitEffect::Notify(Toast::destructive(error_message(code)))
        }
        SignInOutcome::Unrecognized(code) => {
            log::warn!(
                "Sign-in ended without a destination: {}",
                code.as_deref().unwrap_or("no error code")
            );
            SubmitEffect::Notify(unknown_error_toast(ToastVariant::Default))
        }
        SignInOutcome::Failed(err) => {
            log::error!("Sign-in request failed: {}", err);
            SubmitEffect::Notify(unknown_error_toast(ToastVariant::Default))
        }
    }
}

pub fn interpret_federated(result: Result<String, ApiError>) -> SubmitEffect {
    match result {
        Ok(url) => SubmitEffect::Navigate(url),
        Err(err) => {
            log::error!("Federated sign-in failed: {}", err);
            SubmitEffect::Notify(unknown_error_toast(ToastVariant::Destructive))
        }
    }
}
