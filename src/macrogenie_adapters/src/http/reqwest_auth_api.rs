use macrogenie_core::{
    AuthApi, AuthApiError, AuthGrant, Credential, Email, Password, ProfileDetails,
    ProfileStatus, Registration, RegistrationForm, SessionResult, VerificationCode,
};
use reqwest::{Client, Method, RequestBuilder, Response, Url, header::ACCEPT};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;

use super::dto::{
    ChangePasswordRequest, EmailRequest, ErrorResponse, GoogleLoginRequest, LoginRequest,
    ProfileStatusResponse, RegisterRequest, RegisterResponse, ResetPasswordRequest,
    TokenResponse, UpdateProfileRequest, UpdateProfileResponse, ValidateTokenResponse,
    VerifyEmailRequest,
};
use crate::config::api;

/// [`AuthApi`] over the backend's JSON REST endpoints.
#[derive(Clone)]
pub struct ReqwestAuthApi {
    http_client: Client,
    base_url: String,
}

impl ReqwestAuthApi {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Endpoint paths are resolved below any path prefix of the base URL,
    /// so `https://host/backend` + `/api/login` is `https://host/backend/api/login`.
    fn url(&self, path: &str) -> Result<Url, AuthApiError> {
        let mut base =
            Url::parse(&self.base_url).map_err(|e| AuthApiError::Network(e.to_string()))?;
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }

        base.join(path.trim_start_matches('/'))
            .map_err(|e| AuthApiError::Network(e.to_string()))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, AuthApiError> {
        Ok(self
            .http_client
            .request(method, self.url(path)?)
            .header(ACCEPT, "application/json"))
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, AuthApiError> {
        self.request(Method::POST, path)
    }

    fn authorized(
        &self,
        method: Method,
        path: &str,
        credential: &Credential,
    ) -> Result<RequestBuilder, AuthApiError> {
        Ok(self
            .request(method, path)?
            .bearer_auth(credential.as_ref().expose_secret()))
    }

    fn authorized_post(
        &self,
        path: &str,
        credential: &Credential,
    ) -> Result<RequestBuilder, AuthApiError> {
        self.authorized(Method::POST, path, credential)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, AuthApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| AuthApiError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(ErrorResponse::into_message);

    Err(AuthApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, AuthApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| AuthApiError::UnexpectedResponse(e.to_string()))
}

fn grant_from(response: TokenResponse) -> Result<AuthGrant, AuthApiError> {
    let credential = Credential::parse(response.token)
        .map_err(|e| AuthApiError::UnexpectedResponse(e.to_string()))?;

    Ok(AuthGrant {
        credential,
        redirect_url: response.redirect_url,
        profile_complete: response.user.and_then(|user| user.compleated),
    })
}

#[async_trait::async_trait]
impl AuthApi for ReqwestAuthApi {
    #[tracing::instrument(name = "Validating session token", skip_all)]
    async fn validate_token(
        &self,
        credential: &Credential,
    ) -> Result<SessionResult, AuthApiError> {
        let request = self.authorized_post(api::VALIDATE_TOKEN, credential)?;
        let response = send(request).await?;
        let body: ValidateTokenResponse = parse(response).await?;
        Ok(body.into())
    }

    #[tracing::instrument(name = "Sending verification code", skip_all)]
    async fn send_verification_code(
        &self,
        credential: &Credential,
        email: &str,
    ) -> Result<(), AuthApiError> {
        let request = self
            .authorized_post(api::SEND_VERIFICATION_CODE, credential)?
            .json(&EmailRequest { email });
        send(request).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Verifying email", skip_all)]
    async fn verify_email(
        &self,
        credential: &Credential,
        email: &str,
        code: &VerificationCode,
    ) -> Result<(), AuthApiError> {
        let request = self
            .authorized_post(api::VERIFY_EMAIL, credential)?
            .json(&VerifyEmailRequest {
                email,
                verification_code: code.as_str(),
            });
        send(request).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Logging in", skip_all)]
    async fn login(&self, email: &Email, password: &Password) -> Result<AuthGrant, AuthApiError> {
        let request = self.post(api::LOGIN)?.json(&LoginRequest {
            email: email.as_str(),
            password: password.as_ref().expose_secret(),
        });
        let response = send(request).await?;
        grant_from(parse(response).await?)
    }

    #[tracing::instrument(name = "Registering", skip_all)]
    async fn register(&self, form: &RegistrationForm) -> Result<Registration, AuthApiError> {
        let request = self.post(api::REGISTER)?.form(&RegisterRequest {
            first_name: &form.first_name,
            last_name: &form.last_name,
            email: form.email.as_str(),
            password: form.password.as_ref().expose_secret(),
            birthdate: &form.birthdate,
            kilos: &form.kilos,
            height: &form.height,
            gender: &form.gender,
        });
        let response = send(request).await?;
        let body: RegisterResponse = parse(response).await?;

        let grant = body
            .token
            .filter(|token| !token.is_empty())
            .map(|token| {
                grant_from(TokenResponse {
                    token,
                    redirect_url: body.redirect_url.clone(),
                    user: None,
                })
            })
            .transpose()?;

        Ok(Registration {
            grant,
            message: body.message,
        })
    }

    #[tracing::instrument(name = "Exchanging Google tokens", skip_all)]
    async fn google_login(
        &self,
        id_token: &Secret<String>,
        access_token: Option<&Secret<String>>,
    ) -> Result<AuthGrant, AuthApiError> {
        let request = self.post(api::GOOGLE_LOGIN)?.json(&GoogleLoginRequest {
            id_token: id_token.expose_secret(),
            access_token: access_token.map(|token| token.expose_secret().as_str()),
        });
        let response = send(request).await?;
        grant_from(parse(response).await?)
    }

    #[tracing::instrument(name = "Requesting password reset code", skip_all)]
    async fn send_password_reset_code(&self, email: &Email) -> Result<(), AuthApiError> {
        let request = self
            .post(api::SEND_PASSWORD_RESET_CODE)?
            .json(&EmailRequest {
                email: email.as_str(),
            });
        send(request).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Resetting password", skip_all)]
    async fn reset_password(
        &self,
        email: &Email,
        code: &VerificationCode,
        password: &Password,
    ) -> Result<(), AuthApiError> {
        let request = self.post(api::RESET_PASSWORD)?.json(&ResetPasswordRequest {
            email: email.as_str(),
            code: code.as_str(),
            password: password.as_ref().expose_secret(),
        });
        send(request).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Changing password", skip_all)]
    async fn change_password(
        &self,
        credential: &Credential,
        password: &Password,
    ) -> Result<(), AuthApiError> {
        let password = password.as_ref().expose_secret();
        let request = self
            .authorized_post(api::CHANGE_PASSWORD, credential)?
            .json(&ChangePasswordRequest {
                password,
                password_confirmation: password,
            });
        send(request).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Fetching profile status", skip_all)]
    async fn profile_status(
        &self,
        credential: &Credential,
    ) -> Result<ProfileStatus, AuthApiError> {
        let request = self.authorized(Method::GET, api::PROFILE_STATUS, credential)?;
        let response = send(request).await?;
        let body: ProfileStatusResponse = parse(response).await?;
        Ok(body.into())
    }

    #[tracing::instrument(name = "Updating profile", skip_all)]
    async fn update_profile(
        &self,
        credential: &Credential,
        details: &ProfileDetails,
    ) -> Result<Option<String>, AuthApiError> {
        let request = self
            .authorized_post(api::UPDATE_PROFILE, credential)?
            .json(&UpdateProfileRequest::from(details));
        let response = send(request).await?;

        // The save already succeeded; a body without a redirect is fine.
        let body = response
            .json::<UpdateProfileResponse>()
            .await
            .unwrap_or_default();
        Ok(body.redirect_url)
    }
}
