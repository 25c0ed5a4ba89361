use macrogenie_core::{
    AuthApi, AuthApiError, Email, Password, PasswordError, VerificationCode,
    VerificationCodeError,
};
use secrecy::Secret;

const SEND_CODE_FAILED: &str = "Failed to send verification code";
const RESET_FAILED: &str = "Password reset failed";

/// Error types for the forgotten password flow
#[derive(Debug, thiserror::Error)]
pub enum PasswordResetError {
    #[error("Please fill all fields")]
    InvalidCode(#[from] VerificationCodeError),
    #[error("{0}")]
    InvalidPassword(#[from] PasswordError),
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please try again.")]
    Network(String),
}

impl PasswordResetError {
    fn from_api(error: AuthApiError, fallback: &str) -> Self {
        match error {
            AuthApiError::Network(e) => Self::Network(e),
            other => Self::Rejected(other.message().unwrap_or(fallback).to_string()),
        }
    }
}

/// Asks the backend to email a password reset code
pub struct RequestPasswordResetUseCase<A>
where
    A: AuthApi,
{
    auth_api: A,
}

impl<A> RequestPasswordResetUseCase<A>
where
    A: AuthApi,
{
    pub fn new(auth_api: A) -> Self {
        Self { auth_api }
    }

    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(&self, email: &Email) -> Result<(), PasswordResetError> {
        self.auth_api
            .send_password_reset_code(email)
            .await
            .map_err(|e| PasswordResetError::from_api(e, SEND_CODE_FAILED))?;
        tracing::info!("Password reset code requested");
        Ok(())
    }
}

/// Sets a new password using the emailed reset code
pub struct ResetPasswordUseCase<A>
where
    A: AuthApi,
{
    auth_api: A,
}

impl<A> ResetPasswordUseCase<A>
where
    A: AuthApi,
{
    pub fn new(auth_api: A) -> Self {
        Self { auth_api }
    }

    /// Execute the reset
    ///
    /// # Arguments
    /// * `email` - Account whose password is reset
    /// * `code` - Code received by email
    /// * `password` / `confirmation` - New password, typed twice
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: &Email,
        code: &str,
        password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<(), PasswordResetError> {
        let code = VerificationCode::parse(code)?;
        let password = Password::with_confirmation(password, confirmation)?;

        self.auth_api
            .reset_password(email, &code, &password)
            .await
            .map_err(|e| PasswordResetError::from_api(e, RESET_FAILED))?;
        tracing::info!("Password reset");
        Ok(())
    }
}
