use macrogenie_application::VerifyEmailError;
use macrogenie_core::SessionState;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, session_body};

async fn app_with_open_prompt() -> TestApp {
    let app = TestApp::with_token("abc123").await;
    app.accept_token("abc123", session_body(false, "a@b.com", Value::Null))
        .await;
    app.accept_send_code().await;
    app.client.refresh().await;
    assert!(app.client.verification_prompt().await.is_some());
    app
}

async fn verify_endpoint_returns(app: &TestApp, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/verify/email"))
        .and(header("Authorization", "Bearer abc123"))
        .and(body_json(
            json!({ "email": "a@b.com", "verification_code": "000000" }),
        ))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&app.backend)
        .await;
}

#[tokio::test]
async fn accepted_code_closes_prompt_and_clears_flag() {
    let app = app_with_open_prompt().await;
    verify_endpoint_returns(&app, 200).await;

    let outcome = app.client.submit_verification_code("000000").await;

    assert!(outcome.is_ok());
    assert_eq!(app.client.verification_prompt().await, None);
    assert!(!app.client.snapshot().email_unverified);
}

#[tokio::test]
async fn rejected_code_keeps_prompt_open() {
    let app = app_with_open_prompt().await;
    verify_endpoint_returns(&app, 422).await;
    let before = app.client.state();

    let outcome = app.client.submit_verification_code("000000").await;

    assert!(matches!(outcome, Err(VerifyEmailError::Failed)));
    assert!(app.client.verification_prompt().await.is_some());
    assert!(app.client.snapshot().email_unverified);
    assert_eq!(app.client.state(), before);
    assert_eq!(
        before,
        SessionState {
            is_logged_in: true,
            is_profile_complete: false
        }
    );
}

#[tokio::test]
async fn navigation_does_not_resend_code_while_prompt_is_open() {
    let app = app_with_open_prompt().await;

    app.client.navigate("/home").await;
    app.client.navigate("/my-profile").await;

    assert_eq!(app.requests_to("/api/send/verification/code").await, 1);
}

#[tokio::test]
async fn send_failure_is_silent() {
    let app = TestApp::with_token("abc123").await;
    app.accept_token("abc123", session_body(true, "a@b.com", Value::Null))
        .await;
    Mock::given(method("POST"))
        .and(path("/api/send/verification/code"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;

    let state = app.client.refresh().await;

    assert!(state.is_logged_in);
    assert!(app.client.verification_prompt().await.is_some());
}

#[tokio::test]
async fn dismissed_prompt_stays_closed_until_next_unverified_result() {
    let app = app_with_open_prompt().await;

    app.client.dismiss_verification().await;
    assert_eq!(app.client.verification_prompt().await, None);

    app.client.refresh().await;
    assert!(app.client.verification_prompt().await.is_some());
}
