use secrecy::{ExposeSecret, Secret};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Please fill in all fields")]
    Empty,
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,
}

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Validate a new password entered twice.
    pub fn with_confirmation(
        password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<Self, PasswordError> {
        if password.expose_secret().is_empty() || confirmation.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        if password.expose_secret() != confirmation.expose_secret() {
            return Err(PasswordError::Mismatch);
        }
        Self::try_from(password)
    }

    /// Password typed into a login form; only emptiness is checked.
    pub fn for_login(password: Secret<String>) -> Result<Self, PasswordError> {
        if password.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let length = value.expose_secret().chars().count();
        if length == 0 {
            return Err(PasswordError::Empty);
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
