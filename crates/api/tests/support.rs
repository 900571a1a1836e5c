//! Shared fixtures for command tests

use std::sync::Arc;

use studyhall_api::AppContext;
use studyhall_domain::{BackendConfig, Config, ProviderConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestHarness {
    pub backend: MockServer,
    pub provider: MockServer,
    pub ctx: Arc<AppContext>,
}

pub fn config(backend: &MockServer, provider: &MockServer) -> Config {
    Config {
        backend: BackendConfig { base_url: backend.uri(), timeout_seconds: 5 },
        provider: ProviderConfig {
            url: provider.uri(),
            anon_key: "anon-key".to_string(),
            redirect_url: "http://localhost:3000/auth/callback".to_string(),
            oauth_scopes: vec!["https://www.googleapis.com/auth/calendar".to_string()],
        },
    }
}

/// Start both mock services and an app context with no persisted session
pub async fn start() -> TestHarness {
    let backend = MockServer::start().await;
    let provider = MockServer::start().await;

    let ctx = AppContext::initialize(config(&backend, &provider), None)
        .await
        .expect("context initializes");

    TestHarness { backend, provider, ctx }
}

/// Mount the GoTrue `/user` endpoint for the standard test principal
pub async fn mount_provider_user(provider: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u1",
            "email": "a@b.com",
            "user_metadata": { "full_name": "A B", "avatar_url": null },
        })))
        .mount(provider)
        .await;
}

/// Mount a successful session exchange on the backend
pub async fn mount_exchange(backend: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/google/callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {
                "id": "backend-u1",
                "email": "a@b.com",
                "full_name": "A B",
                "avatar_url": null,
            },
            "access_token": "app-jwt",
        })))
        .mount(backend)
        .await;
}

/// Block until the facade reports an authenticated state
pub async fn wait_until_authenticated(ctx: &Arc<AppContext>) {
    let mut watcher = ctx.auth.watch_state();
    while !ctx.auth.state().is_authenticated() {
        watcher.changed().await.expect("state channel open");
    }
}

/// Block until the server has seen `count` requests to `request_path`
///
/// Needed for effects that fire after the observable state change (the
/// calendar sync trigger), so mock expectations verified on drop do not
/// race the spawned bridge task.
pub async fn wait_for_requests(server: &MockServer, request_path: &str, count: usize) {
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(2);
    loop {
        let hits = server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == request_path)
            .count();
        if hits >= count {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "expected {count} request(s) to {request_path}"
        );
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}
