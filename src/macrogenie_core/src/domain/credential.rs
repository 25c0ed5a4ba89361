use secrecy::{ExposeSecret, Secret};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Credential is empty")]
    Empty,
}

/// Opaque bearer token identifying a session to the backend.
///
/// The token shape is never inspected; any non-empty string is accepted.
#[derive(Debug, Clone)]
pub struct Credential(Secret<String>);

impl Credential {
    pub fn parse(token: impl Into<String>) -> Result<Self, CredentialError> {
        Self::try_from(Secret::new(token.into()))
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl TryFrom<Secret<String>> for Credential {
    type Error = CredentialError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Credential {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Credential {}
