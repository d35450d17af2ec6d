//! Embedded schema for schools, users and sessions.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use schoolauth_core::error::{AppError, ErrorKind};
use schoolauth_core::result::AppResult;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date and return the newest applied version.
pub async fn run_migrations(pool: &PgPool) -> AppResult<Option<i64>> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "schema migration failed", e))?;

    let version = latest_version();
    info!(?version, "Schema up to date");
    Ok(version)
}

fn latest_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::{
        EMAIL_UNIQUE_CONSTRAINT, LOGIN_UNIQUE_CONSTRAINT, SCHOOL_FOREIGN_KEY,
    };

    #[test]
    fn test_schema_names_the_mapped_constraints() {
        let sql: String = MIGRATOR.iter().map(|m| &*m.sql).collect();

        for name in [LOGIN_UNIQUE_CONSTRAINT, EMAIL_UNIQUE_CONSTRAINT, SCHOOL_FOREIGN_KEY] {
            assert!(sql.contains(name), "schema lacks constraint {name}");
        }
    }

    #[test]
    fn test_latest_version() {
        assert_eq!(latest_version(), Some(1));
    }
}
