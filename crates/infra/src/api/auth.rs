//! Backend auth gateway
//!
//! Implements the session exchange ("token bridge"), the profile surface and
//! the calendar sync trigger against the backend REST API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use studyhall_core::{AuthGateway, CalendarSync};
use studyhall_domain::{ProfileUpdate, Result, Session, SessionExchange, User};

use super::client::BackendClient;

/// Request body of the session-exchange endpoint
///
/// Carries the provider-scoped tokens (when the grant included them) so the
/// backend can persist them for calendar mirroring.
#[derive(Debug, Serialize)]
struct ExchangeRequest<'a> {
    access_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_refresh_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ExchangeQuery<'a> {
    supabase_user_id: &'a str,
}

/// Auth surface of the backend, shared with the calendar trigger
pub struct BackendAuthGateway {
    client: Arc<BackendClient>,
}

impl BackendAuthGateway {
    #[must_use]
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for BackendAuthGateway {
    async fn exchange_session(&self, session: &Session) -> Result<SessionExchange> {
        let body = ExchangeRequest {
            access_token: &session.access_token,
            refresh_token: session.refresh_token.as_deref(),
            provider_token: session.provider_token.as_deref(),
            provider_refresh_token: session.provider_refresh_token.as_deref(),
            email: session.user.email.as_deref(),
            full_name: session.user.user_metadata.full_name.as_deref(),
            avatar_url: session.user.user_metadata.avatar_url.as_deref(),
        };
        let query = ExchangeQuery { supabase_user_id: &session.user.id };

        self.client.post_with_query("/api/auth/google/callback", &body, &query).await
    }

    async fn fetch_profile(&self) -> Result<User> {
        self.client.get("/api/auth/me").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        self.client.put("/api/auth/me", update).await
    }

    async fn apply_access_token(&self, token: &str) {
        self.client.set_bearer(token);
    }

    async fn clear_access_token(&self) {
        self.client.clear_bearer();
    }
}

#[async_trait]
impl CalendarSync for BackendAuthGateway {
    async fn trigger_sync(&self) -> Result<()> {
        self.client.post_empty("/api/calendar/sync").await
    }
}

impl std::fmt::Debug for BackendAuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendAuthGateway").field("client", &self.client).finish()
    }
}
