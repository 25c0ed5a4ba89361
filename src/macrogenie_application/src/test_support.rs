//! Hand-written port doubles shared by the use case tests.

use std::sync::{Arc, Mutex};

use macrogenie_core::{
    AuthApi, AuthApiError, AuthGrant, Credential, CredentialStore, CredentialStoreError, Email,
    Password, ProfileDetails, ProfileStatus, Registration, RegistrationForm, SessionResult,
    VerificationCode,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Rejected(u16, Option<&'static str>),
    Network,
    Unexpected,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T, AuthApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Rejected(status, message) => Err(AuthApiError::Rejected {
                status: *status,
                message: message.map(str::to_string),
            }),
            Reply::Network => Err(AuthApiError::Network("connection refused".to_string())),
            Reply::Unexpected => Err(AuthApiError::UnexpectedResponse(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

pub fn grant(token: &str) -> AuthGrant {
    AuthGrant {
        credential: Credential::parse(token).unwrap(),
        redirect_url: Some("/home".to_string()),
        profile_complete: None,
    }
}

pub fn verified_session(email: &str, profile_complete: bool) -> SessionResult {
    SessionResult {
        valid: true,
        profile_complete,
        email: email.to_string(),
        email_verified: true,
        is_google_account: false,
    }
}

pub fn unverified_session(email: &str) -> SessionResult {
    SessionResult {
        email_verified: false,
        ..verified_session(email, false)
    }
}

struct Replies {
    validate: Reply<SessionResult>,
    send_code: Reply<()>,
    verify_email: Reply<()>,
    login: Reply<AuthGrant>,
    register: Reply<Registration>,
    google_login: Reply<AuthGrant>,
    reset_code: Reply<()>,
    reset_password: Reply<()>,
    change_password: Reply<()>,
    profile_status: Reply<ProfileStatus>,
    update_profile: Reply<Option<String>>,
    calls: Vec<String>,
}

#[derive(Clone)]
pub struct MockAuthApi {
    replies: Arc<Mutex<Replies>>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Replies {
                validate: Reply::Ok(SessionResult::unauthenticated()),
                send_code: Reply::Ok(()),
                verify_email: Reply::Ok(()),
                login: Reply::Ok(grant("token-from-login")),
                register: Reply::Ok(Registration {
                    grant: Some(grant("token-from-register")),
                    message: Some("Registration complete".to_string()),
                }),
                google_login: Reply::Ok(grant("token-from-google")),
                reset_code: Reply::Ok(()),
                reset_password: Reply::Ok(()),
                change_password: Reply::Ok(()),
                profile_status: Reply::Ok(ProfileStatus::default()),
                update_profile: Reply::Ok(Some("/home".to_string())),
                calls: Vec::new(),
            })),
        }
    }

    pub fn on_validate(self, reply: Reply<SessionResult>) -> Self {
        self.replies.lock().unwrap().validate = reply;
        self
    }

    pub fn on_send_code(self, reply: Reply<()>) -> Self {
        self.replies.lock().unwrap().send_code = reply;
        self
    }

    pub fn on_verify_email(self, reply: Reply<()>) -> Self {
        self.replies.lock().unwrap().verify_email = reply;
        self
    }

    pub fn on_login(self, reply: Reply<AuthGrant>) -> Self {
        self.replies.lock().unwrap().login = reply;
        self
    }

    pub fn on_register(self, reply: Reply<Registration>) -> Self {
        self.replies.lock().unwrap().register = reply;
        self
    }

    pub fn on_google_login(self, reply: Reply<AuthGrant>) -> Self {
        self.replies.lock().unwrap().google_login = reply;
        self
    }

    pub fn on_reset_code(self, reply: Reply<()>) -> Self {
        self.replies.lock().unwrap().reset_code = reply;
        self
    }

    pub fn on_reset_password(self, reply: Reply<()>) -> Self {
        self.replies.lock().unwrap().reset_password = reply;
        self
    }

    pub fn on_change_password(self, reply: Reply<()>) -> Self {
        self.replies.lock().unwrap().change_password = reply;
        self
    }

    pub fn on_profile_status(self, reply: Reply<ProfileStatus>) -> Self {
        self.replies.lock().unwrap().profile_status = reply;
        self
    }

    pub fn on_update_profile(self, reply: Reply<Option<String>>) -> Self {
        self.replies.lock().unwrap().update_profile = reply;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.replies.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(':').next() == Some(endpoint))
            .count()
    }

    fn record(&self, call: String) -> std::sync::MutexGuard<'_, Replies> {
        let mut replies = self.replies.lock().unwrap();
        replies.calls.push(call);
        replies
    }
}

fn token(credential: &Credential) -> String {
    credential.as_ref().expose_secret().clone()
}

#[async_trait::async_trait]
impl AuthApi for MockAuthApi {
    async fn validate_token(
        &self,
        credential: &Credential,
    ) -> Result<SessionResult, AuthApiError> {
        let replies = self.record(format!("validate_token:{}", token(credential)));
        replies.validate.to_result()
    }

    async fn send_verification_code(
        &self,
        credential: &Credential,
        email: &str,
    ) -> Result<(), AuthApiError> {
        let replies = self.record(format!(
            "send_verification_code:{}:{email}",
            token(credential)
        ));
        replies.send_code.to_result()
    }

    async fn verify_email(
        &self,
        credential: &Credential,
        email: &str,
        code: &VerificationCode,
    ) -> Result<(), AuthApiError> {
        let replies = self.record(format!("verify_email:{}:{email}:{code}", token(credential)));
        replies.verify_email.to_result()
    }

    async fn login(&self, email: &Email, _password: &Password) -> Result<AuthGrant, AuthApiError> {
        let replies = self.record(format!("login:{}", email.as_str()));
        replies.login.to_result()
    }

    async fn register(&self, form: &RegistrationForm) -> Result<Registration, AuthApiError> {
        let replies = self.record(format!("register:{}", form.email.as_str()));
        replies.register.to_result()
    }

    async fn google_login(
        &self,
        id_token: &Secret<String>,
        _access_token: Option<&Secret<String>>,
    ) -> Result<AuthGrant, AuthApiError> {
        let replies = self.record(format!("google_login:{}", id_token.expose_secret()));
        replies.google_login.to_result()
    }

    async fn send_password_reset_code(&self, email: &Email) -> Result<(), AuthApiError> {
        let replies = self.record(format!("send_password_reset_code:{}", email.as_str()));
        replies.reset_code.to_result()
    }

    async fn reset_password(
        &self,
        email: &Email,
        code: &VerificationCode,
        _password: &Password,
    ) -> Result<(), AuthApiError> {
        let replies = self.record(format!("reset_password:{}:{code}", email.as_str()));
        replies.reset_password.to_result()
    }

    async fn change_password(
        &self,
        credential: &Credential,
        _password: &Password,
    ) -> Result<(), AuthApiError> {
        let replies = self.record(format!("change_password:{}", token(credential)));
        replies.change_password.to_result()
    }

    async fn profile_status(
        &self,
        credential: &Credential,
    ) -> Result<ProfileStatus, AuthApiError> {
        let replies = self.record(format!("profile_status:{}", token(credential)));
        replies.profile_status.to_result()
    }

    async fn update_profile(
        &self,
        credential: &Credential,
        _details: &ProfileDetails,
    ) -> Result<Option<String>, AuthApiError> {
        let replies = self.record(format!("update_profile:{}", token(credential)));
        replies.update_profile.to_result()
    }
}

#[derive(Clone, Default)]
pub struct MockCredentialStore {
    credential: Arc<RwLock<Option<Credential>>>,
    broken: bool,
}

impl MockCredentialStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holding(token: &str) -> Self {
        Self {
            credential: Arc::new(RwLock::new(Some(Credential::parse(token).unwrap()))),
            broken: false,
        }
    }

    /// Store whose every operation fails with an I/O error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.credential.read().await.as_ref().map(token)
    }

    fn check(&self) -> Result<(), CredentialStoreError> {
        if self.broken {
            return Err(CredentialStoreError::Io("disk unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CredentialStore for MockCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError> {
        self.check()?;
        Ok(self.credential.read().await.clone())
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError> {
        self.check()?;
        *self.credential.write().await = Some(credential);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        self.check()?;
        *self.credential.write().await = None;
        Ok(())
    }
}
