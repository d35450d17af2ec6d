//! Route definitions for the SchoolAuth HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/checkSession", get(handlers::auth::check_session))
        .route("/logout", get(handlers::auth::logout))
        .route("/health", get(handlers::health::health));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = middleware::build_cors_layer(&state.config.server.cors) {
        router = router.layer(cors);
    }

    router.with_state(state)
}
