//! Unified application error types for SchoolAuth.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Every error carries two views of the
//! failure: an [`ErrorKind`] that decides how it is handled and logged, and an
//! [`ErrorCode`] that is the only thing a client ever gets to see.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Input failed a field rule. Client-fixable.
    Validation,
    /// Credentials were rejected.
    Authentication,
    /// A uniqueness conflict (login or email already taken).
    Conflict,
    /// The requested resource was not found.
    NotFound,
    /// A database error occurred.
    Database,
    /// The session backend failed.
    Session,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A store or hashing call did not finish in time.
    Timeout,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind represents an infrastructure fault rather than a
    /// client mistake.
    pub fn is_infrastructure(&self) -> bool {
        !matches!(
            self,
            Self::Validation | Self::Authentication | Self::Conflict | Self::NotFound
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Database => write!(f, "DATABASE"),
            Self::Session => write!(f, "SESSION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Client-facing reason code, serialized into `{"message": <code>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The school identifier is malformed or unknown.
    BadSchool,
    /// Any other field failure, and every rejected login.
    BadData,
    /// The login is already taken.
    LoginExists,
    /// The email is already taken.
    EmailExists,
    /// Anything the client cannot fix.
    ServerError,
}

impl ErrorCode {
    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadSchool => "bad_school",
            Self::BadData => "bad_data",
            Self::LoginExists => "login_exists",
            Self::EmailExists => "email_exists",
            Self::ServerError => "server_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unified application error used throughout SchoolAuth.
#[derive(Debug, Error)]
#[error("{kind} ({code}): {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// The code reported to the client.
    pub code: ErrorCode,
    /// A human-readable message for logs. Never sent to clients.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new infrastructure error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            code: ErrorCode::ServerError,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The school identifier is malformed or does not exist.
    pub fn bad_school(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, ErrorCode::BadSchool, message)
    }

    /// A field failed its syntax or length rule.
    pub fn bad_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, ErrorCode::BadData, message)
    }

    /// Login rejected. Deliberately identical for unknown login and wrong password.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, ErrorCode::BadData, message)
    }

    /// The login is already registered.
    pub fn login_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, ErrorCode::LoginExists, message)
    }

    /// The email is already registered.
    pub fn email_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, ErrorCode::EmailExists, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, ErrorCode::ServerError, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, ErrorCode::ServerError, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, ErrorCode::ServerError, message)
    }

    /// Create a session backend error.
    pub fn session(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Session, ErrorCode::ServerError, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, ErrorCode::ServerError, message)
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, ErrorCode::ServerError, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("Blocking task failed: {err}"),
            err,
        )
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        Self::with_source(ErrorKind::Timeout, "Operation timed out", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_snake_case() {
        let json = serde_json::to_string(&ErrorCode::LoginExists).unwrap();
        assert_eq!(json, "\"login_exists\"");
        assert_eq!(ErrorCode::BadSchool.as_str(), "bad_school");
        assert_eq!(ErrorCode::ServerError.to_string(), "server_error");
    }

    #[test]
    fn test_invalid_credentials_reports_bad_data() {
        let err = AppError::invalid_credentials("no such login");
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.code, ErrorCode::BadData);
    }

    #[test]
    fn test_infrastructure_errors_hide_behind_server_error() {
        let io = std::io::Error::other("disk gone");
        let err = AppError::from(io);
        assert_eq!(err.code, ErrorCode::ServerError);
        assert!(err.kind.is_infrastructure());
        assert!(!ErrorKind::Conflict.is_infrastructure());
    }

    #[test]
    fn test_clone_drops_source() {
        let err = AppError::with_source(
            ErrorKind::Database,
            "boom",
            std::io::Error::other("inner"),
        );
        let cloned = err.clone();
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Database);
    }
}
