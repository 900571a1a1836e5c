//! Port interfaces for the session sync flow
//!
//! These traits define the boundaries between the auth business logic
//! and infrastructure implementations (identity provider, backend REST API).

use async_trait::async_trait;
use studyhall_domain::{ProfileUpdate, Result, Session, SessionExchange, User};

/// Parameters for initiating an OAuth sign-in at the identity provider
#[derive(Debug, Clone)]
pub struct OAuthRequest {
    /// Provider identifier (e.g. `"google"`)
    pub provider: String,
    /// Extra scopes requested on top of the identity scopes
    pub scopes: Vec<String>,
    /// URL the provider redirects to after consent
    pub redirect_to: String,
}

/// Trait for the third-party identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Return the restored session, if the provider still holds one
    async fn restore_session(&self) -> Result<Option<Session>>;

    /// Begin the OAuth flow; returns the authorization URL to open
    ///
    /// The completed sign-in arrives later as a session change event.
    async fn sign_in_with_oauth(&self, request: &OAuthRequest) -> Result<String>;

    /// Terminate the provider session
    async fn sign_out(&self) -> Result<()>;
}

/// Trait for the backend auth surface consumed by the facade
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange a provider session for an application token and profile
    async fn exchange_session(&self, session: &Session) -> Result<SessionExchange>;

    /// Fetch the current profile using the installed credential
    async fn fetch_profile(&self) -> Result<User>;

    /// Update profile fields; returns the canonical profile
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User>;

    /// Install the application token as the default credential for
    /// subsequent backend calls
    async fn apply_access_token(&self, token: &str);

    /// Remove the default credential
    async fn clear_access_token(&self);
}

/// Trait for the best-effort calendar synchronization trigger
#[async_trait]
pub trait CalendarSync: Send + Sync {
    /// Issue one sync call; the caller decides what to do with failures
    async fn trigger_sync(&self) -> Result<()>;
}
