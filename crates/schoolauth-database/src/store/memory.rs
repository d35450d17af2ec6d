//! In-memory credential store for tests and local development.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use schoolauth_core::error::AppError;
use schoolauth_core::result::AppResult;
use schoolauth_entity::user::{NewUser, User};

use super::CredentialStore;

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    by_login: HashMap<String, Uuid>,
    by_email: HashMap<String, Uuid>,
    schools: BTreeSet<String>,
}

/// Credential store held entirely in process memory.
///
/// All tables sit behind one lock so the uniqueness checks and the insert
/// happen atomically, mirroring the database constraints.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Inner>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the given schools registered.
    pub fn with_schools<I, S>(schools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inner = Inner {
            schools: schools.into_iter().map(Into::into).collect(),
            ..Inner::default()
        };
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Register a school. Returns `false` if it was already present.
    pub async fn add_school(&self, school_id: impl Into<String>) -> bool {
        self.inner.write().await.schools.insert(school_id.into())
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_user_by_login_or_email(
        &self,
        login: &str,
        email: &str,
    ) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        let id = inner
            .by_login
            .get(login)
            .or_else(|| inner.by_email.get(email));
        Ok(id.and_then(|id| inner.users.get(id)).cloned())
    }

    async fn school_exists(&self, school_id: &str) -> AppResult<bool> {
        Ok(self.inner.read().await.schools.contains(school_id))
    }

    async fn insert_user(&self, user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        if inner.by_login.contains_key(&user.login) {
            return Err(AppError::login_exists(format!(
                "Login '{}' already exists",
                user.login
            )));
        }
        if inner.by_email.contains_key(&user.email) {
            return Err(AppError::email_exists("Email already in use"));
        }
        if !inner.schools.contains(&user.school_id) {
            return Err(AppError::bad_school(format!(
                "School '{}' does not exist",
                user.school_id
            )));
        }

        let user = user.into_user(Utc::now());
        inner.by_login.insert(user.login.clone(), user.id);
        inner.by_email.insert(user.email.clone(), user.id);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_login
            .get(login)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
