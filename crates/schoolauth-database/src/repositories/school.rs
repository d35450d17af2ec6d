//! School registry repository.

use sqlx::PgPool;

use schoolauth_core::error::{AppError, ErrorKind};
use schoolauth_core::result::AppResult;
use schoolauth_entity::school::School;

/// Repository for the `schools` table.
#[derive(Debug, Clone)]
pub struct SchoolRepository {
    pool: PgPool,
}

impl SchoolRepository {
    /// Create a new school repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether a school with this identifier is registered.
    pub async fn exists(&self, school_id: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM schools WHERE school_id = $1)")
            .bind(school_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up school", e))
    }

    /// Register a school. Returns `false` if it was already present.
    pub async fn create(&self, school_id: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO schools (school_id) VALUES ($1) ON CONFLICT (school_id) DO NOTHING",
        )
        .bind(school_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create school", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// List all schools ordered by identifier.
    pub async fn find_all(&self) -> AppResult<Vec<School>> {
        sqlx::query_as::<_, School>("SELECT * FROM schools ORDER BY school_id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list schools", e))
    }

    /// Number of users registered against a school.
    pub async fn count_users(&self, school_id: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE school_id = $1")
            .bind(school_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count school users", e)
            })
    }

    /// Remove a school. Fails while users still reference it.
    pub async fn delete(&self, school_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM schools WHERE school_id = $1")
            .bind(school_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    AppError::new(
                        ErrorKind::Conflict,
                        schoolauth_core::ErrorCode::BadSchool,
                        format!("School '{school_id}' still has registered users"),
                    )
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete school", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
