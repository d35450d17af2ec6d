//! Registration, login, session check and logout.

pub mod service;

pub use service::{AuthService, LoginOutcome};
