//! GoTrue identity-provider client
//!
//! Speaks the GoTrue REST surface: authorization URL construction, session
//! restoration through the refresh-token grant, callback-fragment parsing
//! and sign-out.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;
use studyhall_core::{IdentityProvider, OAuthRequest};
use studyhall_domain::{ProviderConfig, Result, Session, SessionUser, StudyHallError};
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

/// Shape of the GoTrue token and user endpoints
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    provider_token: Option<String>,
    #[serde(default)]
    provider_refresh_token: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: SessionUser,
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        Session {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            provider_token: response.provider_token,
            provider_refresh_token: response.provider_refresh_token,
            expires_at: response.expires_at,
            user: response.user,
        }
    }
}

/// Tokens carried in the OAuth callback fragment
#[derive(Debug, Default)]
struct CallbackTokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
    provider_token: Option<String>,
    provider_refresh_token: Option<String>,
    expires_at: Option<i64>,
}

/// GoTrue client
///
/// The refresh token used for restoration is handed in at construction
/// (the embedding application owns persistence). The most recent access
/// token passing through the client is remembered for sign-out.
pub struct GoTrueClient {
    http: HttpClient,
    config: ProviderConfig,
    persisted_refresh_token: Option<String>,
    access_token: Mutex<Option<String>>,
}

impl GoTrueClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = HttpClient::new()?;
        Ok(Self { http, config, persisted_refresh_token: None, access_token: Mutex::new(None) })
    }

    /// Supply the refresh token persisted from a previous run
    #[must_use]
    pub fn with_persisted_refresh_token(mut self, token: Option<String>) -> Self {
        self.persisted_refresh_token = token;
        self
    }

    #[cfg(test)]
    fn from_parts(http: HttpClient, config: ProviderConfig) -> Self {
        Self { http, config, persisted_refresh_token: None, access_token: Mutex::new(None) }
    }

    /// Build the authorization URL for the hosted OAuth flow
    pub fn authorize_url(&self, request: &OAuthRequest) -> Result<String> {
        let mut url = self.endpoint("authorize")?;

        url.query_pairs_mut()
            .append_pair("provider", &request.provider)
            .append_pair("redirect_to", &request.redirect_to);
        if !request.scopes.is_empty() {
            url.query_pairs_mut().append_pair("scopes", &request.scopes.join(" "));
        }

        Ok(url.into())
    }

    /// Complete a sign-in from the OAuth callback fragment
    ///
    /// GoTrue returns tokens in the URL fragment; the principal is fetched
    /// from `/user` with the new access token.
    pub async fn session_from_callback(&self, fragment: &str) -> Result<Session> {
        let tokens = parse_fragment(fragment);
        let access_token = tokens.access_token.ok_or_else(|| {
            StudyHallError::Provider("callback fragment carries no access token".into())
        })?;

        let user = self.fetch_user(&access_token).await?;
        *self.access_token.lock() = Some(access_token.clone());

        Ok(Session {
            access_token,
            refresh_token: tokens.refresh_token,
            provider_token: tokens.provider_token,
            provider_refresh_token: tokens.provider_refresh_token,
            expires_at: tokens.expires_at,
            user,
        })
    }

    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser> {
        let url = self.endpoint("user")?;
        let request = self
            .http
            .request(reqwest::Method::GET, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token);

        let response = self.http.send(request).await?;
        if !response.status().is_success() {
            return Err(StudyHallError::Provider(format!(
                "user lookup failed with HTTP {}",
                response.status().as_u16()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| StudyHallError::Provider(format!("malformed user response: {e}")))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = if self.config.url.ends_with('/') {
            self.config.url.clone()
        } else {
            format!("{}/", self.config.url)
        };
        Url::parse(&base)
            .and_then(|u| u.join(path))
            .map_err(|e| StudyHallError::Config(format!("invalid provider url: {e}")))
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn restore_session(&self) -> Result<Option<Session>> {
        let Some(refresh_token) = self.persisted_refresh_token.as_deref() else {
            debug!("no persisted refresh token, nothing to restore");
            return Ok(None);
        };

        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "refresh_token");

        let request = self
            .http
            .request(reqwest::Method::POST, url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }));

        let response = self.http.send(request).await?;
        if !response.status().is_success() {
            return Err(StudyHallError::Provider(format!(
                "refresh grant failed with HTTP {}",
                response.status().as_u16()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| StudyHallError::Provider(format!("malformed token response: {e}")))?;

        *self.access_token.lock() = Some(token.access_token.clone());
        Ok(Some(token.into()))
    }

    async fn sign_in_with_oauth(&self, request: &OAuthRequest) -> Result<String> {
        self.authorize_url(request)
    }

    async fn sign_out(&self) -> Result<()> {
        let Some(access_token) = self.access_token.lock().take() else {
            return Ok(());
        };

        let url = self.endpoint("logout")?;
        let request = self
            .http
            .request(reqwest::Method::POST, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token);

        let response = self.http.send(request).await?;
        if !response.status().is_success() {
            return Err(StudyHallError::Provider(format!(
                "logout failed with HTTP {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for GoTrueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoTrueClient")
            .field("url", &self.config.url)
            .field("has_persisted_refresh_token", &self.persisted_refresh_token.is_some())
            .finish()
    }
}

fn parse_fragment(fragment: &str) -> CallbackTokens {
    let fragment = fragment.trim_start_matches('#');
    let mut tokens = CallbackTokens::default();

    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" => tokens.access_token = Some(value.into_owned()),
            "refresh_token" => tokens.refresh_token = Some(value.into_owned()),
            "provider_token" => tokens.provider_token = Some(value.into_owned()),
            "provider_refresh_token" => {
                tokens.provider_refresh_token = Some(value.into_owned());
            }
            "expires_at" => tokens.expires_at = value.parse().ok(),
            _ => {}
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(url: &str) -> ProviderConfig {
        ProviderConfig {
            url: url.to_string(),
            anon_key: "anon-key".to_string(),
            redirect_url: "http://localhost:3000/auth/callback".to_string(),
            oauth_scopes: vec!["https://www.googleapis.com/auth/calendar".to_string()],
        }
    }

    fn client(server: &MockServer) -> GoTrueClient {
        GoTrueClient::from_parts(HttpClient::new().expect("http client"), config(&server.uri()))
    }

    fn oauth_request() -> OAuthRequest {
        OAuthRequest {
            provider: "google".to_string(),
            scopes: vec!["https://www.googleapis.com/auth/calendar".to_string()],
            redirect_to: "http://localhost:3000/auth/callback".to_string(),
        }
    }

    fn user_json() -> serde_json::Value {
        serde_json::json!({
            "id": "u1",
            "email": "a@b.com",
            "user_metadata": { "full_name": "A B", "avatar_url": null },
        })
    }

    #[test]
    fn authorize_url_carries_provider_redirect_and_scopes() {
        let provider =
            GoTrueClient::from_parts(HttpClient::new().expect("http client"), config("https://id.test"));

        let url = provider.authorize_url(&oauth_request()).expect("url");
        let parsed = Url::parse(&url).expect("valid url");

        assert!(url.starts_with("https://id.test/authorize?"));
        let pairs: Vec<(String, String)> =
            parsed.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert!(pairs.contains(&("provider".to_string(), "google".to_string())));
        assert!(pairs.contains(&(
            "redirect_to".to_string(),
            "http://localhost:3000/auth/callback".to_string()
        )));
        assert!(pairs.contains(&(
            "scopes".to_string(),
            "https://www.googleapis.com/auth/calendar".to_string()
        )));
    }

    #[tokio::test]
    async fn restore_without_persisted_token_yields_none() {
        let server = MockServer::start().await;
        let provider = client(&server);

        let restored = provider.restore_session().await.expect("restore");
        assert!(restored.is_none());
    }

    #[tokio::test]
    async fn restore_uses_the_refresh_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(header("apikey", "anon-key"))
            .and(body_partial_json(serde_json::json!({"refresh_token": "persisted"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "fresh-jwt",
                "refresh_token": "rotated",
                "expires_at": 1893456000i64,
                "user": user_json(),
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = client(&server).with_persisted_refresh_token(Some("persisted".to_string()));
        let session = provider.restore_session().await.expect("restore").expect("session");

        assert_eq!(session.access_token, "fresh-jwt");
        assert_eq!(session.refresh_token.as_deref(), Some("rotated"));
        assert_eq!(session.user.id, "u1");
        // Refresh grants never carry Google-scoped tokens
        assert!(session.provider_tokens().is_none());
    }

    #[tokio::test]
    async fn rejected_refresh_grant_is_a_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let provider = client(&server).with_persisted_refresh_token(Some("stale".to_string()));
        let result = provider.restore_session().await;
        assert!(matches!(result, Err(StudyHallError::InvalidInput(_) | StudyHallError::Provider(_))));
    }

    #[tokio::test]
    async fn callback_fragment_becomes_a_session_with_provider_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer cb-jwt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&server)
            .await;

        let provider = client(&server);
        let fragment = "#access_token=cb-jwt&refresh_token=cb-refresh\
                        &provider_token=google-access&provider_refresh_token=google-refresh\
                        &expires_at=1893456000";
        let session = provider.session_from_callback(fragment).await.expect("session");

        assert_eq!(session.access_token, "cb-jwt");
        assert_eq!(session.user.email.as_deref(), Some("a@b.com"));
        let tokens = session.provider_tokens().expect("provider tokens");
        assert_eq!(tokens.access_token, "google-access");
    }

    #[tokio::test]
    async fn callback_without_access_token_is_rejected() {
        let server = MockServer::start().await;
        let provider = client(&server);

        let result = provider.session_from_callback("#refresh_token=only").await;
        assert!(matches!(result, Err(StudyHallError::Provider(_))));
    }

    #[tokio::test]
    async fn sign_out_posts_logout_with_the_last_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/logout"))
            .and(header("authorization", "Bearer cb-jwt"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let provider = client(&server);
        provider.session_from_callback("#access_token=cb-jwt").await.expect("session");
        provider.sign_out().await.expect("sign out");

        // A second sign-out has no token left and is a no-op
        provider.sign_out().await.expect("idempotent sign out");
    }
}
