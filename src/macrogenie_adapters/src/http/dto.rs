//! Wire shapes exchanged with the backend.

use macrogenie_core::{ProfileDetails, ProfileStatus, SessionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ValidateTokenResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub compleated: bool,
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
pub struct SessionUser {
    pub email: String,
    /// Only presence matters; the timestamp itself is never read.
    #[serde(default)]
    pub email_verified_at: Option<Value>,
    #[serde(default, rename = "isGoogle")]
    pub is_google: Option<Value>,
}

fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

impl From<ValidateTokenResponse> for SessionResult {
    fn from(response: ValidateTokenResponse) -> Self {
        if !response.valid {
            return SessionResult::unauthenticated();
        }

        let user = response.user;
        SessionResult {
            valid: true,
            profile_complete: response.compleated,
            email_verified: is_present(user.email_verified_at.as_ref()),
            is_google_account: is_present(user.is_google.as_ref()),
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyEmailRequest<'a> {
    pub email: &'a str,
    pub verification_code: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub birthdate: &'a str,
    pub kilos: &'a str,
    pub height: &'a str,
    pub gender: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GoogleLoginRequest<'a> {
    pub id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub user: Option<GrantUser>,
}

#[derive(Debug, Deserialize)]
pub struct GrantUser {
    #[serde(default)]
    pub compleated: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileStatusResponse {
    #[serde(default)]
    pub profile_data: Option<ProfileData>,
    #[serde(default)]
    pub completed_fields: Option<Vec<String>>,
}

/// Stored profile values; numbers and nulls are both possible.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub birthdate: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub kilos: Option<Value>,
    #[serde(default)]
    pub gender: Option<Value>,
}

fn text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

impl From<ProfileStatusResponse> for ProfileStatus {
    fn from(response: ProfileStatusResponse) -> Self {
        let data = response.profile_data.unwrap_or_default();
        ProfileStatus {
            details: ProfileDetails {
                first_name: text(data.first_name),
                last_name: text(data.last_name),
                birthdate: text(data.birthdate),
                height: text(data.height),
                kilos: text(data.kilos),
                gender: text(data.gender),
            },
            completed_fields: response.completed_fields.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest<'a> {
    pub birthdate: &'a str,
    pub height: &'a str,
    pub kilos: &'a str,
    #[serde(rename = "secondName")]
    pub last_name: &'a str,
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    pub gender: &'a str,
}

impl<'a> From<&'a ProfileDetails> for UpdateProfileRequest<'a> {
    fn from(details: &'a ProfileDetails) -> Self {
        Self {
            birthdate: &details.birthdate,
            height: &details.height,
            kilos: &details.kilos,
            last_name: &details.last_name,
            first_name: &details.first_name,
            gender: &details.gender,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileResponse {
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
