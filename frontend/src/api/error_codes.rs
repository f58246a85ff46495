use std::fmt;
use std::str::FromStr;

/// Error codes the credential provider reports that the sign-in form knows
/// how to explain to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    CredentialsNotFound,
    IncorrectEmailPassword,
    UserMissingPassword,
}

impl AuthErrorCode {
    pub const ALL: [AuthErrorCode; 3] = [
        AuthErrorCode::CredentialsNotFound,
        AuthErrorCode::IncorrectEmailPassword,
        AuthErrorCode::UserMissingPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorCode::CredentialsNotFound => "credentials-not-found",
            AuthErrorCode::IncorrectEmailPassword => "incorrect-email-password",
            AuthErrorCode::UserMissingPassword => "user-missing-password",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized auth error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for AuthErrorCode {
    type Err = UnknownErrorCode;

    // The provider emits SCREAMING_SNAKE codes; the form has always used kebab-case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "credentials-not-found" => Ok(AuthErrorCode::CredentialsNotFound),
            "incorrect-email-password" | "incorrect-email-or-password" => {
                Ok(AuthErrorCode::IncorrectEmailPassword)
            }
            "user-missing-password" => Ok(AuthErrorCode::UserMissingPassword),
            _ => Err(UnknownErrorCode(raw.to_string())),
        }
    }
}
