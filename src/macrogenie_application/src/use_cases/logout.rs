use macrogenie_core::{CredentialStore, CredentialStoreError};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
}

/// Logout use case - forgets the stored credential
pub struct LogoutUseCase<S>
where
    S: CredentialStore,
{
    credential_store: S,
}

impl<S> LogoutUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(credential_store: S) -> Self {
        Self { credential_store }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<(), LogoutError> {
        self.credential_store.clear().await?;
        tracing::info!("Logged out");
        Ok(())
    }
}
