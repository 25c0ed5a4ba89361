pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    auth_grant::{AuthGrant, Registration},
    credential::{Credential, CredentialError},
    email::{Email, EmailError},
    password::{MIN_PASSWORD_LENGTH, Password, PasswordError},
    profile::{ProfileDetails, ProfileError, ProfileStatus},
    registration::RegistrationForm,
    session::{SessionPhase, SessionResult, SessionSnapshot, SessionState},
    verification_code::{VerificationCode, VerificationCodeError},
    verification_prompt::VerificationPrompt,
};

pub use ports::{
    repositories::{CredentialStore, CredentialStoreError},
    services::{AuthApi, AuthApiError},
};
