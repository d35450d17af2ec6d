//! SchoolAuth Server: registration, login and server-side sessions
//! for a school registry.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use schoolauth_core::config::AppConfig;
use schoolauth_core::error::AppError;
use schoolauth_database::migration::run_migrations;
use schoolauth_database::pool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("SCHOOLAUTH_CONFIG").unwrap_or_else(|_| "config/local.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect, migrate and serve.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SchoolAuth v{}", env!("CARGO_PKG_VERSION"));

    let pool = pool::connect(&config.database).await?;

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    schoolauth_api::run_server(config, pool).await
}
