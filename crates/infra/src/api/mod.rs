//! Backend REST API adapters
//!
//! `BackendClient` owns the transport and the bearer credential; the typed
//! per-resource clients and the auth gateway are thin layers on top of it.

mod auth;
mod classes;
mod client;
mod dashboard;
mod homework;
mod notes;
mod schedules;

pub use auth::BackendAuthGateway;
pub use classes::ClassesApi;
pub use client::BackendClient;
pub use dashboard::DashboardApi;
pub use homework::HomeworkApi;
pub use notes::NotesApi;
pub use schedules::SchedulesApi;
