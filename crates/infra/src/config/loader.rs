//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `STUDYHALL_BACKEND_URL`: Backend base URL
//! - `STUDYHALL_BACKEND_TIMEOUT`: Request timeout in seconds (optional)
//! - `STUDYHALL_PROVIDER_URL`: Identity provider base URL
//! - `STUDYHALL_PROVIDER_ANON_KEY`: Provider public API key
//! - `STUDYHALL_REDIRECT_URL`: OAuth callback redirect URL
//! - `STUDYHALL_OAUTH_SCOPES`: Comma-separated extra OAuth scopes (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./studyhall.json` or `./studyhall.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use studyhall_domain::constants::GOOGLE_CALENDAR_SCOPE;
use studyhall_domain::{BackendConfig, Config, ProviderConfig, Result, StudyHallError};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `StudyHallError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    // Pick up a local .env before reading the environment
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `StudyHallError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let backend_url = env_var("STUDYHALL_BACKEND_URL")?;
    let timeout_seconds = match std::env::var("STUDYHALL_BACKEND_TIMEOUT") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| StudyHallError::Config(format!("Invalid backend timeout: {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    let provider_url = env_var("STUDYHALL_PROVIDER_URL")?;
    let anon_key = env_var("STUDYHALL_PROVIDER_ANON_KEY")?;
    let redirect_url = env_var("STUDYHALL_REDIRECT_URL")?;
    let oauth_scopes = env_scopes("STUDYHALL_OAUTH_SCOPES");

    Ok(Config {
        backend: BackendConfig { base_url: backend_url, timeout_seconds },
        provider: ProviderConfig { url: provider_url, anon_key, redirect_url, oauth_scopes },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `StudyHallError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StudyHallError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StudyHallError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| StudyHallError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| StudyHallError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| StudyHallError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(StudyHallError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("studyhall.json"),
            cwd.join("studyhall.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("studyhall.json"),
                exe_dir.join("studyhall.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        StudyHallError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse the comma-separated scopes variable, defaulting to the calendar
/// scope the backend needs for homework mirroring.
fn env_scopes(key: &str) -> Vec<String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => vec![GOOGLE_CALENDAR_SCOPE.to_string()],
    }
}
