//! # schoolauth-api
//!
//! HTTP API layer for SchoolAuth built on Axum.
//!
//! Provides the JSON endpoints, the session cookie extractor, middleware
//! (request logging, CORS), DTOs, error mapping and the server bootstrap.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
