//! Session lifecycle manager: create, read and destroy.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;

use schoolauth_core::config::SessionConfig;
use schoolauth_core::result::AppResult;
use schoolauth_entity::session::{SessionProfile, SessionRecord};

use super::store::SessionStore;
use super::token::SessionToken;

/// Issues session handles and resolves them to records.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("backend", &self.store.backend_name())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    /// Creates a manager over the given backend.
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            ttl: Duration::seconds(config.ttl().as_secs() as i64),
        }
    }

    /// Start a logged-in session for the profile and return its handle.
    pub async fn create(&self, profile: SessionProfile) -> AppResult<(SessionToken, SessionRecord)> {
        let token = SessionToken::generate();
        let now = Utc::now();
        let record = SessionRecord::logged_in(profile, now, now + self.ttl);

        self.store.save(&token.digest(), record.clone()).await?;

        debug!(
            user_id = %record.user_id,
            backend = self.store.backend_name(),
            "Session created"
        );
        Ok((token, record))
    }

    /// Resolve a handle to its active record.
    pub async fn read(&self, token: &SessionToken) -> AppResult<Option<SessionRecord>> {
        let now = Utc::now();
        Ok(self
            .store
            .load(&token.digest())
            .await?
            .filter(|record| record.is_active(now)))
    }

    /// Destroy the session behind a handle. Unknown handles are ignored.
    pub async fn destroy(&self, token: &SessionToken) -> AppResult<()> {
        self.store.remove(&token.digest()).await?;
        debug!(backend = self.store.backend_name(), "Session destroyed");
        Ok(())
    }

    /// Delete expired sessions from the backend.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        self.store.purge_expired().await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::super::store::MemorySessionStore;
    use super::*;

    fn manager() -> SessionManager {
        let config = SessionConfig::default();
        SessionManager::new(Arc::new(MemorySessionStore::new(&config)), &config)
    }

    fn profile() -> SessionProfile {
        SessionProfile {
            user_id: Uuid::new_v4(),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            login: "jank".to_string(),
            email: "jan@example.com".to_string(),
            school_id: "1234567890".to_string(),
            role: "staff".to_string(),
            photo_url: Some("https://example.com/jan.png".to_string()),
            language: Some("pl".to_string()),
            theme: None,
            status: "active".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let manager = manager();
        let (token, record) = manager.create(profile()).await.unwrap();

        assert!(record.logged_in);
        assert!(record.expires_at > record.created_at);

        let read = manager.read(&token).await.unwrap().unwrap();
        assert_eq!(read.profile, record.profile);
    }

    #[tokio::test]
    async fn test_destroy() {
        let manager = manager();
        let (token, _) = manager.create(profile()).await.unwrap();

        manager.destroy(&token).await.unwrap();
        assert!(manager.read(&token).await.unwrap().is_none());
        manager.destroy(&token).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_token_reads_none() {
        let manager = manager();
        let stranger = SessionToken::generate();
        assert!(manager.read(&stranger).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let manager = manager();
        let (first, _) = manager.create(profile()).await.unwrap();
        let (second, _) = manager.create(profile()).await.unwrap();

        manager.destroy(&first).await.unwrap();
        assert!(manager.read(&second).await.unwrap().is_some());
    }
}
