//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub provider: ProviderConfig,
}

/// Backend REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g. `http://localhost:8000`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Identity provider (GoTrue-compatible) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the identity provider
    pub url: String,
    /// Public (anonymous) API key sent with provider requests
    #[serde(skip_serializing)]
    pub anon_key: String,
    /// Redirect URL for the OAuth callback
    pub redirect_url: String,
    /// Additional OAuth scopes requested on sign-in (calendar access)
    pub oauth_scopes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_seconds: 30,
            },
            provider: ProviderConfig {
                url: "http://localhost:9999".to_string(),
                anon_key: String::new(),
                redirect_url: "http://localhost:3000/auth/callback".to_string(),
                oauth_scopes: vec![crate::constants::GOOGLE_CALENDAR_SCOPE.to_string()],
            },
        }
    }
}
