//! # StudyHall API
//!
//! Application facade: wires configuration, the identity provider, the
//! backend clients and the auth service into an [`AppContext`], and exposes
//! the command layer the UI calls.

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
pub use utils::logging::init_tracing;
