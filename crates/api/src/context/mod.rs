//! Application context - dependency injection container

use std::sync::Arc;

use studyhall_core::{
    AuthGateway, AuthService, CalendarSync, IdentityProvider, OAuthRequest, SessionStore,
};
use studyhall_domain::{Config, Result};
use studyhall_infra::{
    BackendAuthGateway, BackendClient, ClassesApi, DashboardApi, GoTrueClient, HomeworkApi,
    NotesApi, SchedulesApi,
};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub session_store: Arc<SessionStore>,
    pub auth: Arc<AuthService>,
    pub provider: Arc<GoTrueClient>,
    pub classes: ClassesApi,
    pub homework: HomeworkApi,
    pub schedules: SchedulesApi,
    pub notes: NotesApi,
    pub dashboard: DashboardApi,
}

impl AppContext {
    /// Wire all services and bring the auth flow to its initial state
    ///
    /// The persisted refresh token, if the embedding application has one
    /// from a previous run, lets `AuthService::initialize` restore and
    /// bridge the session on startup.
    pub async fn initialize(
        config: Config,
        persisted_refresh_token: Option<String>,
    ) -> Result<Arc<Self>> {
        let backend = Arc::new(BackendClient::new(&config.backend)?);
        let gateway = Arc::new(BackendAuthGateway::new(Arc::clone(&backend)));

        let provider = Arc::new(
            GoTrueClient::new(config.provider.clone())?
                .with_persisted_refresh_token(persisted_refresh_token),
        );

        let oauth = OAuthRequest {
            provider: "google".to_string(),
            scopes: config.provider.oauth_scopes.clone(),
            redirect_to: config.provider.redirect_url.clone(),
        };

        let auth = Arc::new(AuthService::new(
            Arc::clone(&provider) as Arc<dyn IdentityProvider>,
            Arc::clone(&gateway) as Arc<dyn AuthGateway>,
            gateway as Arc<dyn CalendarSync>,
            oauth,
        ));

        let session_store = Arc::new(SessionStore::new());
        auth.spawn_session_listener(&session_store);
        auth.initialize().await;

        Ok(Arc::new(Self {
            config,
            session_store,
            auth,
            provider,
            classes: ClassesApi::new(Arc::clone(&backend)),
            homework: HomeworkApi::new(Arc::clone(&backend)),
            schedules: SchedulesApi::new(Arc::clone(&backend)),
            notes: NotesApi::new(Arc::clone(&backend)),
            dashboard: DashboardApi::new(backend),
        }))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("backend_url", &self.config.backend.base_url)
            .field("session_store", &self.session_store)
            .finish()
    }
}
