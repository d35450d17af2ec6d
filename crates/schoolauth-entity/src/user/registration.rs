//! Raw registration input.

use std::fmt;

use serde::Deserialize;

/// Registration fields exactly as submitted, before any validation.
#[derive(Clone, Default, Deserialize)]
pub struct Registration {
    /// Ten-digit school identifier.
    pub school_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Desired login.
    pub login: String,
    /// Plaintext password.
    pub password: String,
    /// Email address.
    pub email: String,
    /// Role label, stored verbatim.
    pub role: String,
    /// Status label, stored verbatim.
    pub status: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("school_id", &self.school_id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("role", &self.role)
            .field("status", &self.status)
            .finish()
    }
}
