use std::sync::Arc;

use macrogenie_core::{
    AuthApi, CredentialStore, CredentialStoreError, SessionResult, VerificationCode,
    VerificationCodeError, VerificationPrompt,
};
use tokio::sync::RwLock;

/// Error types for email code submission
#[derive(Debug, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Verification code is empty")]
    EmptyCode(#[from] VerificationCodeError),
    #[error("No email verification is pending")]
    NoPendingVerification,
    #[error("No stored credential")]
    MissingCredential,
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("Verification failed. Please try again.")]
    Failed,
}

pub type VerifyOutcome = Result<(), VerifyEmailError>;

/// Email verification gate.
///
/// Opens a [`VerificationPrompt`] for sessions whose email is unverified and
/// sends the code on a best-effort basis. The send result is only logged.
#[derive(Clone)]
pub struct VerificationGate<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
    prompt: Arc<RwLock<Option<VerificationPrompt>>>,
}

impl<S, A> VerificationGate<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    pub fn new(credential_store: S, auth_api: A) -> Self {
        Self {
            credential_store,
            auth_api,
            prompt: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn prompt(&self) -> Option<VerificationPrompt> {
        self.prompt.read().await.clone()
    }

    /// Fold a validation outcome into the gate.
    ///
    /// A code is sent only when the prompt opens or switches to another
    /// address, so re-validating on every navigation does not resend it.
    #[tracing::instrument(name = "VerificationGate::on_session_result", skip_all)]
    pub async fn on_session_result(&self, result: &SessionResult) {
        if result.requires_email_verification() {
            if result.email.is_empty() {
                tracing::warn!("Unverified session without an email, prompt not opened");
                return;
            }

            let opened = {
                let mut prompt = self.prompt.write().await;
                let retarget = prompt
                    .as_ref()
                    .is_none_or(|open| open.email() != result.email);
                if retarget {
                    *prompt = Some(VerificationPrompt::new(result.email.clone()));
                }
                retarget
            };

            if opened {
                tracing::debug!("Email unverified, opening verification prompt");
                self.send_code(&result.email).await;
            }
        } else if result.valid && self.prompt.write().await.take().is_some() {
            tracing::debug!("Email verified elsewhere, closing verification prompt");
        }
    }

    async fn send_code(&self, email: &str) {
        let credential = match self.credential_store.get().await {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                tracing::warn!("No stored credential, verification code not sent");
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read credential, verification code not sent");
                return;
            }
        };

        match self.auth_api.send_verification_code(&credential, email).await {
            Ok(()) => tracing::info!("Verification code sent"),
            Err(e) => tracing::warn!(error = %e, "Failed to send verification code"),
        }
    }

    /// Submit the code the user typed into the open prompt.
    #[tracing::instrument(name = "VerificationGate::submit_code", skip_all)]
    pub async fn submit_code(&self, code: &str) -> VerifyOutcome {
        let code = VerificationCode::parse(code)?;

        let email = self
            .prompt
            .read()
            .await
            .as_ref()
            .map(|prompt| prompt.email().to_string())
            .ok_or(VerifyEmailError::NoPendingVerification)?;

        let credential = self
            .credential_store
            .get()
            .await?
            .ok_or(VerifyEmailError::MissingCredential)?;

        match self.auth_api.verify_email(&credential, &email, &code).await {
            Ok(()) => {
                let mut prompt = self.prompt.write().await;
                if prompt.as_ref().is_some_and(|open| open.email() == email) {
                    *prompt = None;
                }
                tracing::info!("Email verified");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Email verification rejected");
                Err(VerifyEmailError::Failed)
            }
        }
    }

    /// User closed the prompt without verifying.
    pub async fn dismiss(&self) {
        if self.prompt.write().await.take().is_some() {
            tracing::debug!("Verification prompt dismissed");
        }
    }

    /// Drop any open prompt, e.g. on logout.
    pub async fn close(&self) {
        self.prompt.write().await.take();
    }
}
