//! # StudyHall Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the identity provider and backend
//! - The session sync flow: session store, auth facade, token bridge
//!
//! ## Architecture Principles
//! - Only depends on `studyhall-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{AuthGateway, CalendarSync, IdentityProvider, OAuthRequest};
pub use auth::session_store::{
    SessionChange, SessionChangeKind, SessionStore, SubscriptionId,
};
pub use auth::AuthService;
