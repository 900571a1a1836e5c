use std::time::Duration;

use studyhall_domain::StudyHallError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info` for the studyhall crates. Safe to
/// call more than once: subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,studyhall=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"homework::list"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise. Callers must avoid
/// forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `StudyHallError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &StudyHallError) -> &'static str {
    match error {
        StudyHallError::Config(_) => "config",
        StudyHallError::Network(_) => "network",
        StudyHallError::Auth(_) => "auth",
        StudyHallError::Provider(_) => "provider",
        StudyHallError::NotFound(_) => "not_found",
        StudyHallError::InvalidInput(_) => "invalid_input",
        StudyHallError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_labels_are_stable() {
        assert_eq!(error_label(&StudyHallError::Auth("x".into())), "auth");
        assert_eq!(error_label(&StudyHallError::Provider("x".into())), "provider");
        assert_eq!(error_label(&StudyHallError::NotFound("x".into())), "not_found");
    }
}
