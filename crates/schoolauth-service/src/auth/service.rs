//! The authentication orchestrator.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use schoolauth_auth::password::PasswordHasher;
use schoolauth_auth::session::{SessionManager, SessionToken};
use schoolauth_auth::validation::CredentialValidator;
use schoolauth_core::config::AuthConfig;
use schoolauth_core::error::AppError;
use schoolauth_core::result::AppResult;
use schoolauth_database::store::CredentialStore;
use schoolauth_entity::session::SessionProfile;
use schoolauth_entity::user::{NewUser, Registration};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Fresh session handle for the client.
    pub token: SessionToken,
    /// The snapshot stored in the session.
    pub profile: SessionProfile,
}

/// Registers users, verifies credentials and manages their sessions.
///
/// Holds no state of its own. Every store, session and hashing call is
/// bounded by the configured operation timeout.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    sessions: SessionManager,
    hasher: Arc<PasswordHasher>,
    validator: CredentialValidator,
    timeout: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("sessions", &self.sessions)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        sessions: SessionManager,
        hasher: Arc<PasswordHasher>,
        validator: CredentialValidator,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            sessions,
            hasher,
            validator,
            timeout: Duration::from_secs(config.operation_timeout_seconds),
        }
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| AppError::timeout(format!("{operation} timed out")))?
    }

    /// Register a new user.
    ///
    /// Validation failures touch no store. An existing login is reported
    /// before an existing email, and both before an unknown school.
    pub async fn register(&self, input: Registration) -> AppResult<Uuid> {
        self.validator.validate_registration(&input)?;

        let existing = self
            .bounded(
                "user lookup",
                self.store
                    .find_user_by_login_or_email(&input.login, &input.email),
            )
            .await?;
        if let Some(user) = existing {
            return Err(if user.login == input.login {
                AppError::login_exists(format!("Login '{}' already exists", input.login))
            } else {
                AppError::email_exists("Email already in use")
            });
        }

        let school_known = self
            .bounded("school lookup", self.store.school_exists(&input.school_id))
            .await?;
        if !school_known {
            return Err(AppError::bad_school(format!(
                "School '{}' does not exist",
                input.school_id
            )));
        }

        let password_hash = self
            .bounded("password hashing", self.hasher.hash(input.password))
            .await?;

        let new_user = NewUser {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            login: input.login,
            password_hash,
            email: input.email,
            school_id: input.school_id,
            role: input.role,
            status: input.status,
        };

        let user = self
            .bounded("user insert", self.store.insert_user(new_user))
            .await?;

        info!(user_id = %user.id, school_id = %user.school_id, "User registered");
        Ok(user.id)
    }

    /// Verify credentials and open a session.
    ///
    /// An unknown login and a wrong password fail identically. When
    /// `current` names an existing session it is destroyed once the new
    /// credentials check out.
    pub async fn login(
        &self,
        login: &str,
        password: &str,
        current: Option<&SessionToken>,
    ) -> AppResult<LoginOutcome> {
        self.validator.validate_login(login, password)?;

        let user = self
            .bounded("user lookup", self.store.find_user_by_login(login))
            .await?;

        let Some(user) = user else {
            self.bounded(
                "password hashing",
                self.hasher.equalize_timing(password.to_string()),
            )
            .await?;
            info!("Login rejected");
            return Err(AppError::invalid_credentials("Invalid login or password"));
        };

        let matches = self
            .bounded(
                "password verification",
                self.hasher
                    .verify(password.to_string(), user.password_hash.clone()),
            )
            .await?;
        if !matches {
            info!(user_id = %user.id, "Login rejected");
            return Err(AppError::invalid_credentials("Invalid login or password"));
        }

        if let Some(previous) = current {
            if let Err(e) = self
                .bounded("session destroy", self.sessions.destroy(previous))
                .await
            {
                warn!(user_id = %user.id, error = %e, "Failed to destroy previous session");
            }
        }

        let (token, record) = self
            .bounded("session create", self.sessions.create(user.profile()))
            .await?;

        info!(user_id = %user.id, "Login successful");
        Ok(LoginOutcome {
            token,
            profile: record.profile,
        })
    }

    /// The profile behind a session handle, or `None`.
    ///
    /// Never fails: a backend error is logged and reported as no session.
    pub async fn check_session(&self, token: Option<&SessionToken>) -> Option<SessionProfile> {
        let token = token?;
        match self.bounded("session read", self.sessions.read(token)).await {
            Ok(record) => record.map(|r| r.profile),
            Err(e) => {
                warn!(error = %e, "Session lookup failed");
                None
            }
        }
    }

    /// Destroy the session behind a handle, if any.
    pub async fn logout(&self, token: Option<&SessionToken>) -> AppResult<()> {
        let Some(token) = token else {
            return Ok(());
        };
        self.bounded("session destroy", self.sessions.destroy(token))
            .await?;
        info!("Logout");
        Ok(())
    }

    /// Whether the credential store is reachable.
    pub async fn store_healthy(&self) -> bool {
        matches!(
            self.bounded("health check", self.store.health_check()).await,
            Ok(true)
        )
    }
}
