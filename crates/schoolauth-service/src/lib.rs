//! # schoolauth-service
//!
//! Business logic for SchoolAuth. [`AuthService`] is a stateless
//! orchestrator: every dependency (credential store, session backend,
//! hasher) is injected at construction time via `Arc` references.

pub mod auth;

pub use auth::{AuthService, LoginOutcome};
