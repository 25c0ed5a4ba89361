use std::sync::LazyLock;

use macrogenie_adapters::{HashMapCredentialStore, ReqwestAuthApi, config::test};
use macrogenie_client::{SessionClient, init_tracing};
use macrogenie_core::{Credential, CredentialStore};
use secrecy::ExposeSecret;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Set TEST_LOG to see client logs while debugging a test.
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = init_tracing();
    }
});

pub struct TestApp {
    pub backend: MockServer,
    pub store: HashMapCredentialStore,
    pub client: SessionClient<HashMapCredentialStore, ReqwestAuthApi>,
}

impl TestApp {
    pub async fn new() -> Self {
        LazyLock::force(&TRACING);

        let backend = MockServer::start().await;
        let http_client = reqwest::Client::builder()
            .timeout(test::api::TIMEOUT)
            .build()
            .unwrap();
        let store = HashMapCredentialStore::new();
        let client = SessionClient::new(
            store.clone(),
            ReqwestAuthApi::new(backend.uri(), http_client),
        );

        Self {
            backend,
            store,
            client,
        }
    }

    pub async fn with_token(token: &str) -> Self {
        let app = Self::new().await;
        app.store
            .set(Credential::parse(token).unwrap())
            .await
            .unwrap();
        app
    }

    pub async fn stored_token(&self) -> Option<String> {
        self.store
            .get()
            .await
            .unwrap()
            .map(|credential| credential.as_ref().expose_secret().clone())
    }

    /// Accept `token` at the validate endpoint with the given session body.
    pub async fn accept_token(&self, token: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path("/api/validate/token"))
            .and(header("Authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.backend)
            .await;
    }

    pub async fn reject_tokens(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/validate/token"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.backend)
            .await;
    }

    pub async fn accept_send_code(&self) {
        Mock::given(method("POST"))
            .and(path("/api/send/verification/code"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.backend)
            .await;
    }

    pub async fn requests_to(&self, endpoint: &str) -> usize {
        self.backend
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == endpoint)
            .count()
    }
}

pub fn session_body(compleated: bool, email: &str, verified_at: Value) -> Value {
    json!({
        "valid": true,
        "compleated": compleated,
        "user": { "email": email, "email_verified_at": verified_at, "isGoogle": null }
    })
}

pub fn verified_session(compleated: bool) -> Value {
    session_body(compleated, "a@b.com", json!("2024-11-02T10:15:00.000000Z"))
}
