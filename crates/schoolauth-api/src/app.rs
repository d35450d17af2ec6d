//! Application builder: wires router + state, and runs the server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::sync::watch;
use tracing::{error, info, warn};

use schoolauth_auth::session::{
    DatabaseSessionStore, MemorySessionStore, SessionCleanup, SessionStore,
};
use schoolauth_core::config::{AppConfig, SessionBackendKind};
use schoolauth_core::error::AppError;
use schoolauth_database::repositories::SessionRepository;
use schoolauth_database::store::PgCredentialStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Pick the session backend named in configuration.
pub fn session_store(config: &AppConfig, pool: &PgPool) -> Arc<dyn SessionStore> {
    match config.session.backend {
        SessionBackendKind::Memory => Arc::new(MemorySessionStore::new(&config.session)),
        SessionBackendKind::Database => Arc::new(DatabaseSessionStore::new(Arc::new(
            SessionRepository::new(pool.clone()),
        ))),
    }
}

/// Runs the SchoolAuth server until a shutdown signal arrives.
///
/// The pool must already be connected and migrated.
pub async fn run_server(config: AppConfig, pool: PgPool) -> Result<(), AppError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        session_backend = %config.session.backend,
        "Starting SchoolAuth server"
    );

    let credentials = Arc::new(PgCredentialStore::new(pool.clone()));
    let sessions = session_store(&config, &pool);
    let state = AppState::new(config, credentials, sessions)?;
    let config = Arc::clone(&state.config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let cleanup_handle = (config.session.backend == SessionBackendKind::Database).then(|| {
        let cleanup = SessionCleanup::new(
            state.session_manager.clone(),
            config.session.cleanup_interval_minutes,
        );
        let cancel = shutdown_rx.clone();
        tokio::spawn(async move { cleanup.run(cancel).await })
    });

    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "SchoolAuth server listening");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = cleanup_handle {
        let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
        if tokio::time::timeout(grace, handle).await.is_err() {
            warn!("Session cleanup did not stop within the grace period");
        }
    }

    pool.close().await;
    info!("Database pool closed");
    info!("SchoolAuth server shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
