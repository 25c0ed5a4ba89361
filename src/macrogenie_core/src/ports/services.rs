use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    auth_grant::{AuthGrant, Registration},
    credential::Credential,
    email::Email,
    password::Password,
    profile::{ProfileDetails, ProfileStatus},
    registration::RegistrationForm,
    session::SessionResult,
    verification_code::VerificationCode,
};

#[derive(Debug, Error)]
pub enum AuthApiError {
    /// The backend answered with a non-success status.
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a response (connect failure, timeout).
    #[error("Network error: {0}")]
    Network(String),
    /// A success status whose body could not be understood.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl AuthApiError {
    /// Server supplied message of a rejected request, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Remote backend owning accounts and sessions.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn validate_token(&self, credential: &Credential)
    -> Result<SessionResult, AuthApiError>;

    async fn send_verification_code(
        &self,
        credential: &Credential,
        email: &str,
    ) -> Result<(), AuthApiError>;

    async fn verify_email(
        &self,
        credential: &Credential,
        email: &str,
        code: &VerificationCode,
    ) -> Result<(), AuthApiError>;

    async fn login(&self, email: &Email, password: &Password) -> Result<AuthGrant, AuthApiError>;

    async fn register(&self, form: &RegistrationForm) -> Result<Registration, AuthApiError>;

    async fn google_login(
        &self,
        id_token: &Secret<String>,
        access_token: Option<&Secret<String>>,
    ) -> Result<AuthGrant, AuthApiError>;

    async fn send_password_reset_code(&self, email: &Email) -> Result<(), AuthApiError>;

    async fn reset_password(
        &self,
        email: &Email,
        code: &VerificationCode,
        password: &Password,
    ) -> Result<(), AuthApiError>;

    async fn change_password(
        &self,
        credential: &Credential,
        password: &Password,
    ) -> Result<(), AuthApiError>;

    async fn profile_status(&self, credential: &Credential)
    -> Result<ProfileStatus, AuthApiError>;

    /// Save onboarding details. Returns the screen the backend suggests next.
    async fn update_profile(
        &self,
        credential: &Credential,
        details: &ProfileDetails,
    ) -> Result<Option<String>, AuthApiError>;
}
