//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use schoolauth_auth::password::PasswordHasher;
use schoolauth_auth::session::{SessionManager, SessionStore};
use schoolauth_auth::validation::CredentialValidator;
use schoolauth_core::config::AppConfig;
use schoolauth_core::result::AppResult;
use schoolauth_database::store::CredentialStore;
use schoolauth_service::AuthService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session lifecycle manager
    pub session_manager: SessionManager,
    /// Registration, login and session orchestration
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wire the auth stack on top of a credential store and session backend.
    pub fn new(
        config: AppConfig,
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let session_manager = SessionManager::new(sessions, &config.session);
        let auth_service = AuthService::new(
            credentials,
            session_manager.clone(),
            hasher,
            CredentialValidator::default(),
            &config.auth,
        );

        Ok(Self {
            config: Arc::new(config),
            session_manager,
            auth_service: Arc::new(auth_service),
        })
    }
}
