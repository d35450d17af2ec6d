//! The credential store: user and school persistence as seen by the auth service.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use schoolauth_core::result::AppResult;
use schoolauth_entity::user::{NewUser, User};

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

/// Persistence for users and the school registry.
///
/// Lookups are exact, case-sensitive matches. `insert_user` is the source of
/// truth for login/email uniqueness; a service-level pre-check only exists to
/// produce a friendlier error earlier.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find a user whose login or email matches, preferring a login match.
    async fn find_user_by_login_or_email(&self, login: &str, email: &str)
    -> AppResult<Option<User>>;

    /// Whether the school is registered.
    async fn school_exists(&self, school_id: &str) -> AppResult<bool>;

    /// Atomically insert a user, failing with `login_exists`, `email_exists`
    /// or `bad_school` on a constraint violation.
    async fn insert_user(&self, user: NewUser) -> AppResult<User>;

    /// Find a user by exact login.
    async fn find_user_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
