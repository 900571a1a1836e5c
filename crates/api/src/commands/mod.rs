//! Command layer
//!
//! Thin async wrappers around the context's services. Every command is
//! timed and logged with a stable identifier so UI-triggered operations
//! show up uniformly in the logs.

use std::future::Future;
use std::time::Instant;

use studyhall_domain::Result;
use tracing::warn;

use crate::utils::logging::{error_label, log_command_execution};

pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod homework;
pub mod notes;
pub mod schedules;

/// Run a command future with uniform timing and outcome logging
pub(crate) async fn execute<T, F>(command: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let result = fut.await;

    log_command_execution(command, start.elapsed(), result.is_ok());
    if let Err(error) = &result {
        warn!(command, error = %error, error_type = error_label(error), "command failed");
    }

    result
}
