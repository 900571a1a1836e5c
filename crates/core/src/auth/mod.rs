//! Session sync flow
//!
//! Reconciles the identity-provider session with the backend-issued
//! application token:
//!
//! ```text
//! ┌──────────────┐  session changes   ┌──────────────┐
//! │ SessionStore ├───────────────────►│  AuthService │  facade + token bridge
//! └──────────────┘                    └──────┬───────┘
//!                                            │
//!                                            ├──► IdentityProvider  (sign-in/out)
//!                                            ├──► AuthGateway       (session exchange, profile)
//!                                            └──► CalendarSync      (best-effort trigger)
//! ```
//!
//! The backend exchange is fail-open: if it errors, the user stays
//! authenticated at the provider level with a profile synthesized from the
//! session's own metadata.

pub mod ports;
pub mod service;
pub mod session_store;

pub use service::AuthService;
