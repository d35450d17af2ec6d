//! # schoolauth-database
//!
//! PostgreSQL pool setup, repositories for users, schools and sessions,
//! and the [`CredentialStore`] abstraction the auth service talks to.

pub mod migration;
pub mod pool;
pub mod repositories;
pub mod store;

pub use store::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
