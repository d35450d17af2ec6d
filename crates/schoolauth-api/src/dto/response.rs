//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Message sent after a successful registration.
pub const REGISTER_COMPLETE: &str = "register_complete";
/// Message sent after logout.
pub const LOGOUT_SUCCESS: &str = "logout_success";

/// `{"message": ...}` body used for outcomes and error codes alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome or error code.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// `"up"` or `"down"`.
    pub database: String,
    /// Crate version.
    pub version: String,
}
