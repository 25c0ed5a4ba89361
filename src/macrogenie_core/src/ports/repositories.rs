use async_trait::async_trait;
use thiserror::Error;

use crate::domain::credential::Credential;

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),
    #[error("Corrupt credential storage: {0}")]
    Corrupt(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Io(_), Self::Io(_)) | (Self::Corrupt(_), Self::Corrupt(_))
        )
    }
}

/// Durable slot holding the bearer credential.
///
/// Last write wins; implementations do not inspect the token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError>;
    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError>;
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
