//! End-to-end session sync flow against mocked backend and provider
//!
//! Exercises the real adapters (GoTrue client, backend gateway) under the
//! auth facade, with wiremock standing in for both services.

use std::sync::Arc;
use std::time::Duration;

use studyhall_core::{AuthService, OAuthRequest, SessionStore};
use studyhall_domain::constants::GOOGLE_CALENDAR_SCOPE;
use studyhall_infra::{BackendAuthGateway, BackendClient, GoTrueClient, HttpClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oauth_request() -> OAuthRequest {
    OAuthRequest {
        provider: "google".to_string(),
        scopes: vec![GOOGLE_CALENDAR_SCOPE.to_string()],
        redirect_to: "http://localhost:3000/auth/callback".to_string(),
    }
}

fn provider_config(url: &str) -> studyhall_domain::ProviderConfig {
    studyhall_domain::ProviderConfig {
        url: url.to_string(),
        anon_key: "anon-key".to_string(),
        redirect_url: "http://localhost:3000/auth/callback".to_string(),
        oauth_scopes: vec![GOOGLE_CALENDAR_SCOPE.to_string()],
    }
}

fn exchange_response() -> serde_json::Value {
    serde_json::json!({
        "user": {
            "id": "backend-u1",
            "email": "a@b.com",
            "full_name": "A B",
            "avatar_url": null,
        },
        "access_token": "app-jwt",
    })
}

async fn service_against(
    backend: &MockServer,
    provider: &MockServer,
    persisted_refresh_token: Option<String>,
) -> (Arc<AuthService>, Arc<GoTrueClient>) {
    let http = HttpClient::new().expect("http client");
    let client = Arc::new(BackendClient::from_parts(http, backend.uri()));
    let gateway = Arc::new(BackendAuthGateway::new(client));

    let gotrue = Arc::new(
        GoTrueClient::new(provider_config(&provider.uri()))
            .expect("provider client")
            .with_persisted_refresh_token(persisted_refresh_token),
    );

    let service = Arc::new(AuthService::new(
        Arc::clone(&gotrue) as Arc<dyn studyhall_core::IdentityProvider>,
        Arc::clone(&gateway) as Arc<dyn studyhall_core::AuthGateway>,
        gateway as Arc<dyn studyhall_core::CalendarSync>,
        oauth_request(),
    ));

    (service, gotrue)
}

#[tokio::test]
async fn fresh_sign_in_bridges_and_triggers_calendar_sync() {
    let backend = MockServer::start().await;
    let provider = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u1",
            "email": "a@b.com",
            "user_metadata": { "full_name": "A B", "avatar_url": null },
        })))
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/google/callback"))
        .and(query_param("supabase_user_id", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_response()))
        .expect(1)
        .mount(&backend)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/calendar/sync"))
        .and(header("authorization", "Bearer app-jwt"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&backend)
        .await;

    let (service, gotrue) = service_against(&backend, &provider, None).await;
    let store = SessionStore::new();
    service.spawn_session_listener(&store);

    // Consent grant: the callback fragment carries Google-scoped tokens
    let session = gotrue
        .session_from_callback(
            "#access_token=cb-jwt&refresh_token=cb-refresh\
             &provider_token=google-access&provider_refresh_token=google-refresh",
        )
        .await
        .expect("callback session");

    let mut watcher = service.watch_state();
    store.set_session(Some(session));

    while !service.state().is_authenticated() {
        watcher.changed().await.expect("state channel open");
    }

    let state = service.state();
    assert!(!state.loading);
    assert_eq!(state.user.expect("user").id, "backend-u1");

    // The sync trigger fires after the state flips; wait for it before the
    // mock expectations are verified on drop
    wait_for_requests(&backend, "/api/calendar/sync", 1).await;
}

async fn wait_for_requests(server: &MockServer, request_path: &str, count: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
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
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn backend_outage_leaves_the_user_signed_in_with_derived_profile() {
    let backend = MockServer::start().await;
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(query_param("grant_type", "refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "restored-jwt",
            "refresh_token": "rotated",
            "user": {
                "id": "u1",
                "email": "a@b.com",
                "user_metadata": { "full_name": "A B", "avatar_url": null },
            },
        })))
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/google/callback"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    // Calendar sync must not fire when the exchange failed
    Mock::given(method("POST"))
        .and(path("/api/calendar/sync"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&backend)
        .await;

    let (service, _) = service_against(&backend, &provider, Some("persisted".to_string())).await;
    service.initialize().await;

    let state = service.state();
    assert!(state.is_authenticated());
    assert!(!state.loading);
    let user = state.user.expect("user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.full_name, "A B");
}

#[tokio::test]
async fn sign_out_hits_the_provider_and_clears_the_credential() {
    let backend = MockServer::start().await;
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "restored-jwt",
            "user": {
                "id": "u1",
                "email": "a@b.com",
                "user_metadata": {},
            },
        })))
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(header("authorization", "Bearer restored-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/google/callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_response()))
        .mount(&backend)
        .await;

    let (service, _) = service_against(&backend, &provider, Some("persisted".to_string())).await;
    service.initialize().await;
    assert!(service.state().is_authenticated());

    service.sign_out().await;

    let state = service.state();
    assert!(!state.is_authenticated());
    assert!(state.session.is_none());
    assert!(state.user.is_none());
}
