//! # StudyHall Infrastructure
//!
//! Infrastructure adapters for StudyHall.
//!
//! This crate contains:
//! - The backend REST client and its typed per-resource surfaces
//! - The GoTrue identity-provider adapter
//! - Configuration loading (environment first, file fallback)
//! - Conversions from transport errors into domain errors
//!
//! ## Architecture
//! - Implements the port traits defined in `studyhall-core`
//! - All I/O lives here; the core stays pure

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod provider;

pub use api::{
    BackendAuthGateway, BackendClient, ClassesApi, DashboardApi, HomeworkApi, NotesApi,
    SchedulesApi,
};
pub use config::loader;
pub use errors::InfraError;
pub use http::HttpClient;
pub use provider::GoTrueClient;
