use crate::domain::credential::Credential;

/// Credential handed out by a successful login, registration or Google sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthGrant {
    pub credential: Credential,
    pub redirect_url: Option<String>,
    /// Onboarding state reported with the grant, when the endpoint includes it.
    pub profile_complete: Option<bool>,
}

/// Outcome of a registration request. The backend may accept the
/// registration without issuing a token.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub grant: Option<AuthGrant>,
    pub message: Option<String>,
}
