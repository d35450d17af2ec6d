//! User repository implementation.

use sqlx::PgPool;

use schoolauth_core::error::{AppError, ErrorKind};
use schoolauth_core::result::AppResult;
use schoolauth_entity::user::{NewUser, User};

/// Unique constraint on `users.login`.
pub const LOGIN_UNIQUE_CONSTRAINT: &str = "users_login_key";
/// Unique constraint on `users.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";
/// Foreign key from `users.school_id` to `schools`.
pub const SCHOOL_FOREIGN_KEY: &str = "users_school_id_fkey";

/// Repository for user lookups and inserts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by exact login.
    pub async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by login", e)
            })
    }

    /// Find any user whose login or email matches. A login match wins.
    pub async fn find_by_login_or_email(&self, login: &str, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE login = $1 OR email = $2 \
             ORDER BY (login = $1) DESC LIMIT 1",
        )
        .bind(login)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by login or email", e)
        })
    }

    /// Insert a new user.
    ///
    /// Constraint violations are translated into the matching client-facing
    /// conflict so a lost race with a concurrent registration still reports
    /// `login_exists` / `email_exists`.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, first_name, last_name, login, password_hash, email, \
             school_id, role, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.login)
        .bind(&data.password_hash)
        .bind(&data.email)
        .bind(&data.school_id)
        .bind(&data.role)
        .bind(&data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(LOGIN_UNIQUE_CONSTRAINT) =>
            {
                AppError::login_exists(format!("Login '{}' already exists", data.login))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                AppError::email_exists("Email already in use")
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(SCHOOL_FOREIGN_KEY) => {
                AppError::bad_school(format!("School '{}' does not exist", data.school_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}
