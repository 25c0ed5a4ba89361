use macrogenie_core::{
    AuthApi, AuthApiError, CredentialStore, CredentialStoreError, Registration, RegistrationForm,
};

const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    Rejected(String),
    #[error("Error connecting to the server.")]
    Network(String),
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
}

impl From<AuthApiError> for RegisterError {
    fn from(error: AuthApiError) -> Self {
        match error {
            AuthApiError::Network(e) => Self::Network(e),
            other => Self::Rejected(
                other
                    .message()
                    .unwrap_or(REGISTRATION_FAILED)
                    .to_string(),
            ),
        }
    }
}

/// Register use case - creates an account and stores the issued credential
pub struct RegisterUseCase<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    credential_store: S,
    auth_api: A,
}

impl<S, A> RegisterUseCase<S, A>
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

    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, form: RegistrationForm) -> Result<Registration, RegisterError> {
        let registration = self.auth_api.register(&form).await?;

        match &registration.grant {
            Some(grant) => {
                self.credential_store.set(grant.credential.clone()).await?;
                tracing::info!("Registered and logged in");
            }
            None => tracing::info!("Registered without a credential"),
        }

        Ok(registration)
    }
}
