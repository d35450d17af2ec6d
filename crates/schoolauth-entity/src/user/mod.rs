//! User domain entities.

pub mod model;
pub mod registration;

pub use model::{NewUser, User};
pub use registration::Registration;
