use macrogenie_core::{
    AuthApi, AuthApiError, AuthGrant, CredentialStore, CredentialStoreError, Email, Password,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("Something went wrong. Please try again later.")]
    Unexpected(String),
    #[error("Network error. Please try again.")]
    Network(String),
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
}

impl From<AuthApiError> for LoginError {
    fn from(error: AuthApiError) -> Self {
        match error {
            AuthApiError::Rejected {
                status: 422,
                message,
            } => Self::InvalidCredentials(message.unwrap_or_else(|| INVALID_CREDENTIALS.into())),
            AuthApiError::Network(e) => Self::Network(e),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

/// Login use case - exchanges email and password for a stored credential
pub struct LoginUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
}

impl<S, A> LoginUseCase<S, A>
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

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - User's password
    ///
    /// # Returns
    /// The grant whose credential is now stored, or LoginError
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, email, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<AuthGrant, LoginError> {
        let grant = self.auth_api.login(&email, &password).await?;

        self.credential_store.set(grant.credential.clone()).await?;
        tracing::info!("Logged in");

        Ok(grant)
    }
}
