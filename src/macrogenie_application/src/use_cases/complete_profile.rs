use macrogenie_core::{
    AuthApi, AuthApiError, CredentialStore, CredentialStoreError, ProfileDetails, ProfileError,
    ProfileStatus,
};

const LOAD_FAILED: &str = "Failed to load profile data.";
const SAVE_FAILED: &str = "Failed to save profile data.";

/// Error types for the profile completion flow
#[derive(Debug, thiserror::Error)]
pub enum CompleteProfileError {
    #[error("{0}")]
    IncompleteFields(#[from] ProfileError),
    #[error("Not logged in")]
    MissingCredential,
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please try again.")]
    Network(String),
}

impl CompleteProfileError {
    fn from_api(error: AuthApiError, fallback: &str) -> Self {
        match error {
            AuthApiError::Network(e) => Self::Network(e),
            other => Self::Rejected(other.message().unwrap_or(fallback).to_string()),
        }
    }
}

/// Complete profile use case - loads and saves the onboarding details
pub struct CompleteProfileUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
}

impl<S, A> CompleteProfileUseCase<S, A>
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

    /// Fetch what the backend already has, so saved fields can be shown read-only.
    #[tracing::instrument(name = "CompleteProfileUseCase::status", skip_all)]
    pub async fn status(&self) -> Result<ProfileStatus, CompleteProfileError> {
        let credential = self
            .credential_store
            .get()
            .await?
            .ok_or(CompleteProfileError::MissingCredential)?;

        self.auth_api
            .profile_status(&credential)
            .await
            .map_err(|e| CompleteProfileError::from_api(e, LOAD_FAILED))
    }

    /// Save the details. Every field must be filled in.
    ///
    /// Returns the redirect suggested by the backend, if any.
    #[tracing::instrument(name = "CompleteProfileUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        details: &ProfileDetails,
    ) -> Result<Option<String>, CompleteProfileError> {
        details.ensure_complete()?;

        let credential = self
            .credential_store
            .get()
            .await?
            .ok_or(CompleteProfileError::MissingCredential)?;

        let redirect_url = self
            .auth_api
            .update_profile(&credential, details)
            .await
            .map_err(|e| CompleteProfileError::from_api(e, SAVE_FAILED))?;

        tracing::info!("Profile completed");
        Ok(redirect_url)
    }
}
