use macrogenie_core::{AuthApi, AuthApiError, CredentialStore, SessionResult};

/// Validate session use case - asks the backend whether the stored credential
/// still identifies a live session.
///
/// Never fails: every error path resolves to [`SessionResult::unauthenticated`].
/// Only a rejection by the backend purges the stored credential; transport
/// failures keep it so the next navigation can retry.
#[derive(Clone)]
pub struct ValidateSessionUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
}

impl<S, A> ValidateSessionUseCase<S, A>
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

    #[tracing::instrument(name = "ValidateSessionUseCase::execute", skip(self))]
    pub async fn execute(&self) -> SessionResult {
        let credential = match self.credential_store.get().await {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                tracing::debug!("No stored credential, session is unauthenticated");
                return SessionResult::unauthenticated();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stored credential");
                return SessionResult::unauthenticated();
            }
        };

        match self.auth_api.validate_token(&credential).await {
            Ok(result) if result.valid => result,
            Ok(_) => {
                tracing::debug!("Backend reported the session as invalid");
                SessionResult::unauthenticated()
            }
            Err(AuthApiError::Rejected { status, .. }) => {
                tracing::warn!(status, "Credential rejected, clearing it");
                if let Err(e) = self.credential_store.clear().await {
                    tracing::error!(error = %e, "Failed to clear rejected credential");
                }
                SessionResult::unauthenticated()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session validation failed, keeping credential");
                SessionResult::unauthenticated()
            }
        }
    }
}
