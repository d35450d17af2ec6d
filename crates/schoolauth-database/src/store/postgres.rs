//! PostgreSQL-backed credential store.

use async_trait::async_trait;
use sqlx::PgPool;

use schoolauth_core::result::AppResult;
use schoolauth_entity::user::{NewUser, User};

use super::CredentialStore;
use crate::pool::ping;
use crate::repositories::{SchoolRepository, UserRepository};

/// Credential store over the `users` and `schools` tables.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
    users: UserRepository,
    schools: SchoolRepository,
}

impl PgCredentialStore {
    /// Create a store sharing the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            schools: SchoolRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_user_by_login_or_email(
        &self,
        login: &str,
        email: &str,
    ) -> AppResult<Option<User>> {
        self.users.find_by_login_or_email(login, email).await
    }

    async fn school_exists(&self, school_id: &str) -> AppResult<bool> {
        self.schools.exists(school_id).await
    }

    async fn insert_user(&self, user: NewUser) -> AppResult<User> {
        self.users.create(&user).await
    }

    async fn find_user_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.users.find_by_login(login).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        ping(&self.pool).await
    }
}
