//! Server-side sessions: handles, storage backends, lifecycle and cleanup.

pub mod cleanup;
pub mod manager;
pub mod store;
pub mod token;

pub use cleanup::SessionCleanup;
pub use manager::SessionManager;
pub use store::{DatabaseSessionStore, MemorySessionStore, SessionStore};
pub use token::SessionToken;
