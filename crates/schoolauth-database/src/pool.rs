//! Building the shared `PgPool` from `[database]` settings.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use schoolauth_core::config::DatabaseConfig;
use schoolauth_core::error::{AppError, ErrorKind};
use schoolauth_core::result::AppResult;

/// Parse `database.url`. A malformed URL is a configuration error, not a
/// connectivity one.
pub fn connect_options(config: &DatabaseConfig) -> AppResult<PgConnectOptions> {
    PgConnectOptions::from_str(&config.url).map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "database.url is not a valid URL", e)
    })
}

/// Where the pool points, without credentials.
pub fn describe_target(options: &PgConnectOptions) -> String {
    format!(
        "{}:{}/{}",
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or("-")
    )
}

/// Open the pool and fail fast if the server is unreachable.
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    let options = connect_options(config)?;
    let target = describe_target(&options);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("cannot reach PostgreSQL at {target}"),
                e,
            )
        })?;

    info!(%target, max = config.max_connections, "PostgreSQL pool ready");
    Ok(pool)
}

pub(crate) async fn ping(pool: &PgPool) -> AppResult<bool> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|one| one == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "store ping failed", e))
}
