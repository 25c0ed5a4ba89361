use macrogenie_core::{
    AuthApi, AuthApiError, CredentialStore, CredentialStoreError, Password, PasswordError,
};
use secrecy::Secret;

const CHANGE_FAILED: &str = "Password reset failed";

/// Error types for change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("{0}")]
    InvalidPassword(#[from] PasswordError),
    #[error("Not logged in")]
    MissingCredential,
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please try again.")]
    Network(String),
}

impl From<AuthApiError> for ChangePasswordError {
    fn from(error: AuthApiError) -> Self {
        match error {
            AuthApiError::Network(e) => Self::Network(e),
            other => Self::Rejected(other.message().unwrap_or(CHANGE_FAILED).to_string()),
        }
    }
}

/// Change password use case - sets a new password for the signed-in account
pub struct ChangePasswordUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
}

impl<S, A> ChangePasswordUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    pub fn new(credential_store: S, auth_api: A) -> Self {
        Self {
            credential_store,
            auth_api,
        }
    }

    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        let password = Password::with_confirmation(password, confirmation)?;

        let credential = self
            .credential_store
            .get()
            .await?
            .ok_or(ChangePasswordError::MissingCredential)?;

        self.auth_api.change_password(&credential, &password).await?;
        tracing::info!("Password changed");
        Ok(())
    }
}
