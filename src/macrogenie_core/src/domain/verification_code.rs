use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerificationCodeError {
    #[error("Verification code is empty")]
    Empty,
}

/// Code the user received by email.
///
/// The UI collects six digits, but only emptiness is checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn parse(code: impl Into<String>) -> Result<Self, VerificationCodeError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(VerificationCodeError::Empty);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
