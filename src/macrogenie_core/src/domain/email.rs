use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

static EMAIL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,
    #[error("Invalid email address")]
    Invalid,
}

/// A syntactically valid email address.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: impl Into<String>) -> Result<Self, EmailError> {
        Self::try_from(Secret::new(email.into()))
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let trimmed = value.expose_secret().trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        let is_valid = EMAIL_REGEX
            .as_ref()
            .is_some_and(|regex| regex.is_match(trimmed));
        if !is_valid {
            return Err(EmailError::Invalid);
        }

        Ok(Self(Secret::new(trimmed.to_string())))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}
