/// Open "enter the code we emailed you" interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPrompt {
    email: String,
}

impl VerificationPrompt {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Address the verification code was sent to.
    pub fn email(&self) -> &str {
        &self.email
    }
}
