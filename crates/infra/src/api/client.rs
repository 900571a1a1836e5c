//! Backend REST client
//!
//! Holds the base URL, the transport and the application bearer token. The
//! token slot starts empty; the auth gateway installs it after a successful
//! session exchange and clears it on sign-out.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use studyhall_domain::{BackendConfig, Result, StudyHallError};
use tracing::debug;

use crate::errors::map_status;
use crate::http::HttpClient;

/// HTTP client for the StudyHall backend
pub struct BackendClient {
    http: HttpClient,
    base_url: String,
    bearer: RwLock<Option<String>>,
}

impl BackendClient {
    /// Build a client from backend configuration
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("studyhall/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::from_parts(http, config.base_url.clone()))
    }

    /// Build a client from an existing transport (used in tests)
    #[must_use]
    pub fn from_parts(http: HttpClient, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { http, base_url, bearer: RwLock::new(None) }
    }

    /// Install the bearer token used for subsequent requests
    pub fn set_bearer(&self, token: &str) {
        *self.bearer.write() = Some(token.to_string());
    }

    /// Remove the bearer token
    pub fn clear_bearer(&self) {
        *self.bearer.write() = None;
    }

    /// Whether a bearer token is currently installed
    #[must_use]
    pub fn has_bearer(&self) -> bool {
        self.bearer.read().is_some()
    }

    /// GET a JSON resource
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.send(Method::GET, path, None::<&()>, None::<&()>).await?;
        Self::parse(response).await
    }

    /// GET a JSON resource with query parameters
    pub async fn get_with_query<Q: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<R> {
        let response = self.send(Method::GET, path, None::<&()>, Some(query)).await?;
        Self::parse(response).await
    }

    /// POST a JSON body and parse the JSON response
    pub async fn post<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R> {
        let response = self.send(Method::POST, path, Some(body), None::<&()>).await?;
        Self::parse(response).await
    }

    /// POST with no body; the response body, if any, is discarded
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        let response = self.send(Method::POST, path, None::<&()>, None::<&()>).await?;
        Self::check(response)?;
        Ok(())
    }

    /// POST a JSON body with query parameters and parse the JSON response
    pub async fn post_with_query<T: Serialize, Q: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
        query: &Q,
    ) -> Result<R> {
        let response = self.send(Method::POST, path, Some(body), Some(query)).await?;
        Self::parse(response).await
    }

    /// PUT a JSON body and parse the JSON response
    pub async fn put<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R> {
        let response = self.send(Method::PUT, path, Some(body), None::<&()>).await?;
        Self::parse(response).await
    }

    /// DELETE a resource; 204 is the expected success shape
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.send(Method::DELETE, path, None::<&()>, None::<&()>).await?;
        Self::check(response)?;
        Ok(())
    }

    async fn send<T: Serialize, Q: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
        query: Option<&Q>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);

        if let Some(token) = self.bearer.read().as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        self.http.send(request).await
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            debug!(%status, url = %response.url(), "backend returned error status");
            Err(map_status(status.as_u16(), status.canonical_reason()))
        }
    }

    async fn parse<R: DeserializeOwned>(response: Response) -> Result<R> {
        let response = Self::check(response)?;

        if response.status() == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                StudyHallError::Internal(
                    "no-content response cannot populate the expected type".into(),
                )
            });
        }

        response
            .json()
            .await
            .map_err(|e| StudyHallError::Internal(format!("failed to parse response: {e}")))
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .field("has_bearer", &self.has_bearer())
            .finish()
    }
}
