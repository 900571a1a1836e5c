//! Authentication and session types
//!
//! The `Session` mirrors what the identity provider issues; the `User` is the
//! application profile the backend owns. The two meet in the token bridge.

use serde::{Deserialize, Serialize};

/// Provider-scoped OAuth token pair
///
/// Present only immediately after a fresh consent grant; session
/// restorations never carry these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Profile metadata embedded in the provider session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Principal carried by the provider session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Identity-provider session
///
/// Owned by the session store; everything else holds a clone. Created on
/// sign-in, replaced on token refresh, cleared on sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Google-scoped access token (fresh OAuth grant only)
    #[serde(default)]
    pub provider_token: Option<String>,
    /// Google-scoped refresh token (fresh OAuth grant only)
    #[serde(default)]
    pub provider_refresh_token: Option<String>,
    /// Unix timestamp at which the provider token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl Session {
    /// Extract the provider-scoped token pair, if the grant carried one
    #[must_use]
    pub fn provider_tokens(&self) -> Option<ProviderTokens> {
        self.provider_token.as_ref().map(|token| ProviderTokens {
            access_token: token.clone(),
            refresh_token: self.provider_refresh_token.clone(),
        })
    }
}

/// Application-level user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

impl User {
    /// Synthesize a profile from the session's embedded metadata
    ///
    /// Used when the backend exchange fails: the caller stays authenticated
    /// at the provider level with a locally-derived profile.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            id: session.user.id.clone(),
            email: session.user.email.clone().unwrap_or_default(),
            full_name: session.user.user_metadata.full_name.clone().unwrap_or_default(),
            avatar_url: session.user.user_metadata.avatar_url.clone(),
        }
    }
}

/// Partial profile update sent to `PUT /api/auth/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Response of the backend session-exchange endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExchange {
    pub user: User,
    pub access_token: String,
}

/// Auth lifecycle phase derived from the state tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    Unauthenticated,
    Bridging,
    Authenticated,
}

/// Snapshot of the authentication state observed by consumers
///
/// Invariant: `is_authenticated()` is true only when both session and user
/// are present. `loading` is true from flow start until the token bridge
/// completes (success or failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the restored session has been queried
    #[must_use]
    pub fn initial() -> Self {
        Self { session: None, user: None, loading: true }
    }

    /// State after sign-out or when no session exists
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { session: None, user: None, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.is_authenticated() {
            AuthPhase::Authenticated
        } else if self.session.is_some() && self.loading {
            AuthPhase::Bridging
        } else {
            AuthPhase::Unauthenticated
        }
    }
}
