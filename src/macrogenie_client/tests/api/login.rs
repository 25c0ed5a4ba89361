use fake::{Fake, faker::internet::en::SafeEmail};
use macrogenie_application::{GoogleLoginError, LoginError};
use macrogenie_core::{Email, Password, RegistrationForm, SessionState};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, verified_session};

fn credentials() -> (Email, Password) {
    (
        Email::parse(SafeEmail().fake::<String>()).unwrap(),
        Password::for_login(Secret::new("password123".to_string())).unwrap(),
    )
}

#[tokio::test]
async fn login_then_validate_yields_logged_in_session() {
    let app = TestApp::new().await;
    let (email, password) = credentials();
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "email": email.as_str(), "password": "password123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "redirect_url": "/home"
        })))
        .mount(&app.backend)
        .await;
    app.accept_token("fresh-token", verified_session(true)).await;

    let grant = app.client.login(email, password).await.unwrap();

    assert_eq!(grant.redirect_url.as_deref(), Some("/home"));
    assert_eq!(app.stored_token().await.as_deref(), Some("fresh-token"));
    assert_eq!(
        app.client.state(),
        SessionState {
            is_logged_in: true,
            is_profile_complete: true
        }
    );
}

#[tokio::test]
async fn invalid_credentials_surface_server_message() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "message": "These credentials do not match our records." })),
        )
        .mount(&app.backend)
        .await;
    let (email, password) = credentials();

    let error = app.client.login(email, password).await.unwrap_err();

    assert!(matches!(error, LoginError::InvalidCredentials(_)));
    assert_eq!(
        error.to_string(),
        "These credentials do not match our records."
    );
    assert_eq!(app.stored_token().await, None);
    assert!(!app.client.state().is_logged_in);
}

#[tokio::test]
async fn server_error_on_login_is_generic() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;
    let (email, password) = credentials();

    let error = app.client.login(email, password).await.unwrap_err();

    assert!(matches!(error, LoginError::Unexpected(_)));
}

#[tokio::test]
async fn registration_stores_token_and_validates() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "new-account",
            "message": "Registration complete"
        })))
        .mount(&app.backend)
        .await;
    app.accept_token("new-account", verified_session(false)).await;

    let form = RegistrationForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: Email::parse(SafeEmail().fake::<String>()).unwrap(),
        password: Password::try_from(Secret::new("password123".to_string())).unwrap(),
        birthdate: "1990-12-10".to_string(),
        kilos: "60".to_string(),
        height: "170".to_string(),
        gender: "female".to_string(),
    };
    let registration = app.client.register(form).await.unwrap();

    assert_eq!(registration.message.as_deref(), Some("Registration complete"));
    assert_eq!(
        app.client.state(),
        SessionState {
            is_logged_in: true,
            is_profile_complete: false
        }
    );
}

#[tokio::test]
async fn google_sign_in_stores_token_and_validates() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/web/google-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "google-token",
            "redirect_url": "/home",
            "user": { "compleated": true }
        })))
        .mount(&app.backend)
        .await;
    app.accept_token(
        "google-token",
        json!({
            "valid": true,
            "compleated": true,
            "user": { "email": "a@b.com", "email_verified_at": "2024-01-01", "isGoogle": 1 }
        }),
    )
    .await;

    app.client
        .google_login(Secret::new("id-token".to_string()), None)
        .await
        .unwrap();

    assert!(app.client.state().is_logged_in);
    assert!(app.client.snapshot().is_google_account);
}

#[tokio::test]
async fn google_sign_in_failure_leaves_session_logged_out() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/web/google-login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.backend)
        .await;

    let error = app
        .client
        .google_login(Secret::new("id-token".to_string()), None)
        .await
        .unwrap_err();

    assert!(matches!(error, GoogleLoginError::Rejected(_)));
    assert_eq!(error.to_string(), "Google login failed");
    assert_eq!(app.stored_token().await, None);
}
