//! Auth commands

use std::sync::Arc;

use studyhall_domain::{AuthState, ProfileUpdate, Result, User};

use super::execute;
use crate::context::AppContext;

/// Snapshot of the current auth state for the UI
#[must_use]
pub fn get_auth_state(ctx: &Arc<AppContext>) -> AuthState {
    ctx.auth.state()
}

/// Begin the Google OAuth flow; returns the authorization URL to open
pub async fn sign_in_with_google(ctx: &Arc<AppContext>) -> Result<String> {
    execute("auth::sign_in_with_google", ctx.auth.sign_in_with_google()).await
}

/// Complete a sign-in from the OAuth callback fragment
///
/// Parses the fragment at the provider, then pushes the session into the
/// store, which drives the token bridge.
pub async fn complete_sign_in(ctx: &Arc<AppContext>, callback_fragment: &str) -> Result<()> {
    let ctx = Arc::clone(ctx);
    let fragment = callback_fragment.to_string();
    execute("auth::complete_sign_in", async move {
        let session = ctx.provider.session_from_callback(&fragment).await?;
        ctx.session_store.set_session(Some(session));
        Ok(())
    })
    .await
}

/// Sign out of the provider and clear local state
pub async fn sign_out(ctx: &Arc<AppContext>) -> Result<()> {
    let ctx = Arc::clone(ctx);
    execute("auth::sign_out", async move {
        ctx.auth.sign_out().await;
        ctx.session_store.set_session(None);
        Ok(())
    })
    .await
}

/// Re-fetch the canonical profile from the backend
pub async fn refresh_profile(ctx: &Arc<AppContext>) -> Result<User> {
    execute("auth::refresh_profile", ctx.auth.refresh_profile()).await
}

/// Update the profile of the signed-in user
pub async fn update_profile(ctx: &Arc<AppContext>, update: &ProfileUpdate) -> Result<User> {
    execute("auth::update_profile", ctx.auth.update_profile(update)).await
}
