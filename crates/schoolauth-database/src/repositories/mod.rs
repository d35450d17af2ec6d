//! Repository implementations for SchoolAuth tables.

pub mod school;
pub mod session;
pub mod user;

pub use school::SchoolRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
