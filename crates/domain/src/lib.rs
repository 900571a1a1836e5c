//! # StudyHall Domain
//!
//! Business domain types and models for StudyHall.
//!
//! This crate contains:
//! - Domain data types (Session, User, Homework, Schedule, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Pure domain utilities (weekly schedule grid)
//!
//! ## Architecture
//! - No dependencies on other StudyHall crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export the weekly grid builder
pub use utils::week_grid::build_weekly_schedule;
