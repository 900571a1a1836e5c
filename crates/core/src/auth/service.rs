//! Auth facade
//!
//! Single entry point for authentication consumed by the rest of the
//! application. Drives the UNAUTHENTICATED → BRIDGING → AUTHENTICATED state
//! machine, runs the token bridge, and fires the calendar sync trigger.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use studyhall_domain::{AuthState, ProfileUpdate, Result, Session, StudyHallError, User};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::ports::{AuthGateway, CalendarSync, IdentityProvider, OAuthRequest};
use super::session_store::{SessionChange, SessionChangeKind, SessionStore, SubscriptionId};

/// Auth facade and token bridge
///
/// State is published through a `watch` channel so consumers can both
/// snapshot it and await changes. A generation counter guards against a
/// sign-out racing ahead of an in-flight bridge: stale bridge completions
/// are discarded instead of re-authenticating the user.
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    gateway: Arc<dyn AuthGateway>,
    calendar: Arc<dyn CalendarSync>,
    oauth: OAuthRequest,
    state: watch::Sender<AuthState>,
    epoch: AtomicU64,
}

impl AuthService {
    /// Create a new auth facade
    ///
    /// `oauth` is the sign-in request template (provider, scopes, redirect)
    /// handed to the identity provider on every sign-in initiation.
    #[must_use]
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        gateway: Arc<dyn AuthGateway>,
        calendar: Arc<dyn CalendarSync>,
        oauth: OAuthRequest,
    ) -> Self {
        let (state, _) = watch::channel(AuthState::initial());
        Self { provider, gateway, calendar, oauth, state, epoch: AtomicU64::new(0) }
    }

    /// Snapshot of the current auth state
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// App-start entry point: bridge a restored session if one exists
    ///
    /// A provider failure during restoration is treated as "no session":
    /// startup must not wedge on a degraded provider.
    pub async fn initialize(&self) {
        match self.provider.restore_session().await {
            Ok(Some(session)) => {
                info!(user_id = %session.user.id, "restored provider session, bridging");
                self.bridge(session).await;
            }
            Ok(None) => {
                debug!("no session to restore");
                self.state.send_replace(AuthState::unauthenticated());
            }
            Err(error) => {
                warn!(error = %error, "session restoration failed, starting unauthenticated");
                self.state.send_replace(AuthState::unauthenticated());
            }
        }
    }

    /// React to a session change emitted by the [`SessionStore`]
    pub async fn handle_session_change(&self, change: SessionChange) {
        match change.kind {
            SessionChangeKind::SignedOut => self.clear_local_state().await,
            SessionChangeKind::SignedIn | SessionChangeKind::TokenRefreshed => {
                if let Some(session) = change.session {
                    self.bridge(session).await;
                }
            }
        }
    }

    /// Subscribe this facade to a session store
    ///
    /// Store dispatch is synchronous; bridging is not. Events are forwarded
    /// through an unbounded channel into a spawned task, which preserves
    /// order and lets each event carry its own session snapshot.
    pub fn spawn_session_listener(self: &Arc<Self>, store: &SessionStore) -> SubscriptionId {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionChange>();
        let id = store.subscribe(move |change| {
            // Receiver dropped means the service is shutting down
            let _ = tx.send(change.clone());
        });

        let service = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(change) = rx.recv().await {
                service.handle_session_change(change).await;
            }
        });

        id
    }

    /// Token bridge: exchange the provider session for an application token
    ///
    /// Fail-open: a backend failure degrades to a session-derived profile
    /// instead of surfacing an error. The loading flag clears only once the
    /// exchange has completed, either way. No retries are attempted.
    async fn bridge(&self, session: Session) {
        let epoch = self.epoch.load(Ordering::SeqCst);
        let had_provider_tokens = session.provider_tokens().is_some();

        self.state.send_replace(AuthState {
            session: Some(session.clone()),
            user: None,
            loading: true,
        });

        let (user, exchanged) = match self.gateway.exchange_session(&session).await {
            Ok(exchange) => {
                self.gateway.apply_access_token(&exchange.access_token).await;
                debug!(user_id = %exchange.user.id, "session exchange succeeded");
                (exchange.user, true)
            }
            Err(error) => {
                // Deliberate fail-open: stay authenticated at the provider
                // level while the backend is degraded
                warn!(error = %error, "session exchange failed, using provider-derived profile");
                (User::from_session(&session), false)
            }
        };

        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!("discarding bridge completion from a superseded epoch");
            return;
        }

        self.state.send_replace(AuthState {
            session: Some(session),
            user: Some(user),
            loading: false,
        });

        if exchanged && had_provider_tokens {
            self.trigger_calendar_sync().await;
        }
    }

    /// Best-effort calendar sync; failures are logged, never surfaced
    async fn trigger_calendar_sync(&self) {
        if let Err(error) = self.calendar.trigger_sync().await {
            warn!(error = %error, "calendar sync trigger failed");
        } else {
            info!("calendar sync triggered");
        }
    }

    /// Initiate the Google OAuth flow
    ///
    /// Returns the authorization URL to open. Initiation errors propagate
    /// to the caller with the loading flag reset and no other state change;
    /// the completed sign-in arrives later as a session change.
    pub async fn sign_in_with_google(&self) -> Result<String> {
        self.state.send_modify(|state| state.loading = true);

        match self.provider.sign_in_with_oauth(&self.oauth).await {
            Ok(url) => Ok(url),
            Err(error) => {
                self.state.send_modify(|state| state.loading = false);
                Err(error)
            }
        }
    }

    /// Sign out
    ///
    /// Provider failures are logged, never propagated: local state and the
    /// backend credential are cleared regardless, so the user can never be
    /// left stuck authenticated.
    pub async fn sign_out(&self) {
        if let Err(error) = self.provider.sign_out().await {
            warn!(error = %error, "provider sign-out failed, clearing local state anyway");
        }
        self.clear_local_state().await;
        info!("signed out");
    }

    /// Re-fetch the canonical profile from the backend
    ///
    /// Useful after a degraded (fail-open) bridge once the backend is
    /// reachable again.
    pub async fn refresh_profile(&self) -> Result<User> {
        if !self.state.borrow().is_authenticated() {
            return Err(StudyHallError::Auth("profile refresh requires authentication".into()));
        }

        let user = self.gateway.fetch_profile().await?;
        self.state.send_modify(|state| state.user = Some(user.clone()));
        Ok(user)
    }

    /// Update profile fields
    ///
    /// Only meaningful once authenticated. Errors propagate and leave the
    /// current profile untouched.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        if !self.state.borrow().is_authenticated() {
            return Err(StudyHallError::Auth("profile update requires authentication".into()));
        }

        let user = self.gateway.update_profile(update).await?;
        self.state.send_modify(|state| state.user = Some(user.clone()));
        Ok(user)
    }

    /// Clear session, user and credential; advance the epoch so any
    /// in-flight bridge completion is discarded
    async fn clear_local_state(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.gateway.clear_access_token().await;
        self.state.send_replace(AuthState::unauthenticated());
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("oauth", &self.oauth)
            .field("epoch", &self.epoch.load(Ordering::SeqCst))
            .finish()
    }
}
