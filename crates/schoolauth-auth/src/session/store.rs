//! Session storage backends.
//!
//! Records are keyed by the token digest. Both backends only ever return
//! records that are still active.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use moka::future::Cache;

use schoolauth_core::config::SessionConfig;
use schoolauth_core::result::AppResult;
use schoolauth_database::repositories::SessionRepository;
use schoolauth_entity::session::SessionRecord;

/// Persistence for session records.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Store a record under `key`, replacing any previous one.
    async fn save(&self, key: &str, record: SessionRecord) -> AppResult<()>;

    /// Load an active record.
    async fn load(&self, key: &str) -> AppResult<Option<SessionRecord>>;

    /// Remove a record. Removing an unknown key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Delete expired records, returning how many were removed.
    async fn purge_expired(&self) -> AppResult<u64>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}

/// Sessions held in an in-process moka cache.
///
/// The cache TTL matches the session lifetime, so entries disappear on
/// their own; [`purge_expired`](SessionStore::purge_expired) only runs
/// moka's pending maintenance.
#[derive(Clone)]
pub struct MemorySessionStore {
    cache: Cache<String, SessionRecord>,
}

impl std::fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySessionStore")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl MemorySessionStore {
    /// Create a store bounded by `max_sessions` with the configured TTL.
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_live(config.ttl())
            .build();
        Self { cache }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, key: &str, record: SessionRecord) -> AppResult<()> {
        self.cache.insert(key.to_string(), record).await;
        Ok(())
    }

    async fn load(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        let now = Utc::now();
        Ok(self
            .cache
            .get(key)
            .await
            .filter(|record| record.is_active(now)))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn purge_expired(&self) -> AppResult<u64> {
        self.cache.run_pending_tasks().await;
        Ok(0)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// Sessions persisted in the `sessions` table.
#[derive(Debug, Clone)]
pub struct DatabaseSessionStore {
    repo: Arc<SessionRepository>,
}

impl DatabaseSessionStore {
    /// Create a store over the session repository.
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SessionStore for DatabaseSessionStore {
    async fn save(&self, key: &str, record: SessionRecord) -> AppResult<()> {
        self.repo.create(key, &record).await
    }

    async fn load(&self, key: &str) -> AppResult<Option<SessionRecord>> {
        self.repo.find_active(key, Utc::now()).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.repo.delete(key).await.map(|_| ())
    }

    async fn purge_expired(&self) -> AppResult<u64> {
        self.repo.delete_expired(Utc::now()).await
    }

    fn backend_name(&self) -> &'static str {
        "database"
    }
}
