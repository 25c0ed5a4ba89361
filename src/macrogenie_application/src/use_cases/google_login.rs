use macrogenie_core::{AuthApi, AuthApiError, AuthGrant, CredentialStore, CredentialStoreError};
use secrecy::{ExposeSecret, Secret};

#[derive(Debug, thiserror::Error)]
pub enum GoogleLoginError {
    #[error("No ID token received")]
    MissingIdToken,
    #[error("Google login failed")]
    Rejected(#[source] AuthApiError),
    #[error("Network error. Please try again.")]
    Network(String),
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
}

impl From<AuthApiError> for GoogleLoginError {
    fn from(error: AuthApiError) -> Self {
        match error {
            AuthApiError::Network(e) => Self::Network(e),
            other => Self::Rejected(other),
        }
    }
}

/// Google sign-in use case - trades the identity provider's tokens for a
/// backend credential
pub struct GoogleLoginUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
}

impl<S, A> GoogleLoginUseCase<S, A>
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

    #[tracing::instrument(name = "GoogleLoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        id_token: Secret<String>,
        access_token: Option<Secret<String>>,
    ) -> Result<AuthGrant, GoogleLoginError> {
        if id_token.expose_secret().is_empty() {
            return Err(GoogleLoginError::MissingIdToken);
        }

        let grant = self
            .auth_api
            .google_login(&id_token, access_token.as_ref())
            .await?;

        self.credential_store.set(grant.credential.clone()).await?;
        tracing::info!(profile_complete = ?grant.profile_complete, "Logged in with Google");

        Ok(grant)
    }
}
