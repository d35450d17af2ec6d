//! # schoolauth-auth
//!
//! Credential checks and server-side sessions.
//!
//! ## Modules
//!
//! - `validation` - ordered field rules for registration and login input
//! - `password` - password policy and Argon2id hashing
//! - `session` - session handles, storage backends and lifecycle

pub mod password;
pub mod session;
pub mod validation;

pub use password::{PasswordHasher, PasswordPolicy};
pub use session::{
    DatabaseSessionStore, MemorySessionStore, SessionCleanup, SessionManager, SessionStore,
    SessionToken,
};
pub use validation::CredentialValidator;
