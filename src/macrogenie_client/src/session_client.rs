use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use macrogenie_adapters::{FileCredentialStore, ReqwestAuthApi, Settings};
use macrogenie_application::{
    ChangePasswordError, ChangePasswordUseCase, CompleteProfileError, CompleteProfileUseCase,
    GoogleLoginError, GoogleLoginUseCase, LoginError, LoginUseCase, LogoutError, LogoutUseCase, NavigationTracker, PasswordResetError,
    RegisterError, RegisterUseCase, RequestPasswordResetUseCase, ResetPasswordUseCase,
    SessionStateMachine, ValidateSessionUseCase, VerificationGate, VerifyOutcome,
};
use macrogenie_core::{
    AuthApi, AuthGrant, CredentialStore, Email, Password, ProfileDetails, ProfileStatus,
    Registration, RegistrationForm, SessionSnapshot, SessionState, VerificationPrompt,
};
use secrecy::Secret;
use tokio::sync::watch;

struct Inner<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    validator: ValidateSessionUseCase<S, A>,
    gate: VerificationGate<S, A>,
    state: SessionStateMachine,
    navigation: NavigationTracker,
    login: LoginUseCase<S, A>,
    register: RegisterUseCase<S, A>,
    google_login: GoogleLoginUseCase<S, A>,
    logout: LogoutUseCase<S>,
    request_password_reset: RequestPasswordResetUseCase<A>,
    reset_password: ResetPasswordUseCase<A>,
    change_password: ChangePasswordUseCase<S, A>,
    complete_profile: CompleteProfileUseCase<S, A>,
}

/// Session handle shared by every screen of the app.
///
/// Screens read [`SessionState`] (or subscribe to [`SessionSnapshot`]
/// changes) and report navigation and user actions back. Cloning is cheap;
/// all clones drive the same session.
pub struct SessionClient<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for SessionClient<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SessionClient<FileCredentialStore, ReqwestAuthApi> {
    /// Production wiring: file-backed credential slot and the REST backend.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.api.timeout_in_millis)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        let auth_api = ReqwestAuthApi::new(settings.api.base_url.clone(), http_client);
        let credential_store = FileCredentialStore::new(
            settings.credentials.path.clone(),
            settings.credentials.key.clone(),
        );

        Ok(Self::new(credential_store, auth_api))
    }
}

impl<S, A> SessionClient<S, A>
where
    S: CredentialStore + Clone + 'static,
    A: AuthApi + Clone + 'static,
{
    /// Create a client over the provided store and backend
    ///
    /// # Arguments
    /// * `credential_store` - Durable slot for the bearer credential (must be Clone)
    /// * `auth_api` - Backend client (must be Clone)
    ///
    /// Both are shared between use cases through their internal `Arc`s.
    pub fn new(credential_store: S, auth_api: A) -> Self {
        let inner = Inner {
            validator: ValidateSessionUseCase::new(credential_store.clone(), auth_api.clone()),
            gate: VerificationGate::new(credential_store.clone(), auth_api.clone()),
            state: SessionStateMachine::new(),
            navigation: NavigationTracker::new(),
            login: LoginUseCase::new(credential_store.clone(), auth_api.clone()),
            register: RegisterUseCase::new(credential_store.clone(), auth_api.clone()),
            google_login: GoogleLoginUseCase::new(credential_store.clone(), auth_api.clone()),
            logout: LogoutUseCase::new(credential_store.clone()),
            request_password_reset: RequestPasswordResetUseCase::new(auth_api.clone()),
            reset_password: ResetPasswordUseCase::new(auth_api.clone()),
            change_password: ChangePasswordUseCase::new(credential_store.clone(), auth_api.clone()),
            complete_profile: CompleteProfileUseCase::new(credential_store, auth_api),
        };

        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<S, A> SessionClient<S, A>
where
    S: CredentialStore,
    A: AuthApi,
{
    pub fn state(&self) -> SessionState {
        self.inner.state.state()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    /// Report the active screen. The session is re-validated only when the
    /// location differs from the previous one.
    pub async fn navigate(&self, location: &str) -> SessionState {
        if self.inner.navigation.enter(location).await {
            tracing::debug!(location, "Location changed, validating session");
            return self.refresh().await;
        }
        self.state()
    }

    /// Validate the stored credential and fold the outcome into the session.
    ///
    /// Overlapping calls are not de-duplicated; the last one to resolve wins.
    #[tracing::instrument(name = "SessionClient::refresh", skip(self))]
    pub async fn refresh(&self) -> SessionState {
        let result = self.inner.validator.execute().await;
        self.inner.state.apply(&result);
        self.inner.gate.on_session_result(&result).await;
        self.state()
    }

    pub async fn login(&self, email: Email, password: Password) -> Result<AuthGrant, LoginError> {
        let grant = self.inner.login.execute(email, password).await?;
        self.refresh().await;
        Ok(grant)
    }

    pub async fn register(&self, form: RegistrationForm) -> Result<Registration, RegisterError> {
        let registration = self.inner.register.execute(form).await?;
        if registration.grant.is_some() {
            self.refresh().await;
        }
        Ok(registration)
    }

    pub async fn google_login(
        &self,
        id_token: Secret<String>,
        access_token: Option<Secret<String>>,
    ) -> Result<AuthGrant, GoogleLoginError> {
        let grant = self
            .inner
            .google_login
            .execute(id_token, access_token)
            .await?;
        self.refresh().await;
        Ok(grant)
    }

    /// Forget the credential and return to the logged-out state.
    ///
    /// The local session is reset even when the store cannot be cleared.
    pub async fn logout(&self) -> Result<(), LogoutError> {
        let cleared = self.inner.logout.execute().await;
        if let Err(e) = &cleared {
            tracing::error!(error = %e, "Failed to clear credential on logout");
        }
        self.inner.gate.close().await;
        self.inner.state.logged_out();
        cleared
    }

    /// Onboarding finished elsewhere; [`Self::complete_profile`] raises this itself.
    pub fn profile_completed(&self) {
        self.inner.state.profile_completed();
    }

    pub async fn profile_status(&self) -> Result<ProfileStatus, CompleteProfileError> {
        self.inner.complete_profile.status().await
    }

    /// Save the onboarding details and move an incomplete session to complete.
    ///
    /// Returns the backend's suggested next screen.
    pub async fn complete_profile(
        &self,
        details: &ProfileDetails,
    ) -> Result<Option<String>, CompleteProfileError> {
        let redirect_url = self.inner.complete_profile.execute(details).await?;
        self.inner.state.profile_completed();
        Ok(redirect_url)
    }

    pub async fn verification_prompt(&self) -> Option<VerificationPrompt> {
        self.inner.gate.prompt().await
    }

    pub async fn submit_verification_code(&self, code: &str) -> VerifyOutcome {
        self.inner.gate.submit_code(code).await?;
        self.inner.state.email_verified();
        Ok(())
    }

    pub async fn dismiss_verification(&self) {
        self.inner.gate.dismiss().await;
    }

    pub async fn request_password_reset(&self, email: &Email) -> Result<(), PasswordResetError> {
        self.inner.request_password_reset.execute(email).await
    }

    pub async fn reset_password(
        &self,
        email: &Email,
        code: &str,
        password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<(), PasswordResetError> {
        self.inner
            .reset_password
            .execute(email, code, password, confirmation)
            .await
    }

    pub async fn change_password(
        &self,
        password: Secret<String>,
        confirmation: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        self.inner
            .change_password
            .execute(password, confirmation)
            .await
    }
}
