//! Session management configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted session lifetime: one leap year.
pub const MAX_TTL_MINUTES: u64 = 366 * 24 * 60;

/// Longest accepted gap between cleanup sweeps: one week.
pub const MAX_CLEANUP_INTERVAL_MINUTES: u64 = 7 * 24 * 60;

/// Session backend and cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where session records live.
    #[serde(default)]
    pub backend: SessionBackendKind,
    /// Name of the cookie carrying the session handle.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Session lifetime in minutes.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
    /// Set the `Secure` attribute on the session cookie.
    #[serde(default)]
    pub secure_cookie: bool,
    /// `SameSite` attribute on the session cookie.
    #[serde(default)]
    pub same_site: SameSitePolicy,
    /// Maximum number of live sessions kept by the memory backend.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Interval between expired-session sweeps of the database backend.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackendKind::default(),
            cookie_name: default_cookie_name(),
            ttl_minutes: default_ttl(),
            secure_cookie: false,
            same_site: SameSitePolicy::default(),
            max_sessions: default_max_sessions(),
            cleanup_interval_minutes: default_cleanup_interval(),
        }
    }
}

impl SessionConfig {
    /// Session lifetime, never longer than [`MAX_TTL_MINUTES`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_minutes.min(MAX_TTL_MINUTES) * 60)
    }

    /// Reject settings the session backends cannot honour.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_TTL_MINUTES).contains(&self.ttl_minutes) {
            return Err(AppError::configuration(format!(
                "session.ttl_minutes must be between 1 and {MAX_TTL_MINUTES}, got {}",
                self.ttl_minutes
            )));
        }
        if !(1..=MAX_CLEANUP_INTERVAL_MINUTES).contains(&self.cleanup_interval_minutes) {
            return Err(AppError::configuration(format!(
                "session.cleanup_interval_minutes must be between 1 and \
                 {MAX_CLEANUP_INTERVAL_MINUTES}, got {}",
                self.cleanup_interval_minutes
            )));
        }
        if self.cookie_name.is_empty() {
            return Err(AppError::configuration("session.cookie_name is empty"));
        }
        if self.same_site == SameSitePolicy::None && !self.secure_cookie {
            return Err(AppError::configuration(
                "session.same_site = \"none\" requires session.secure_cookie",
            ));
        }
        Ok(())
    }
}

/// Session persistence backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackendKind {
    /// In-process cache. Sessions do not survive a restart.
    #[default]
    Memory,
    /// The `sessions` table in PostgreSQL.
    Database,
}

impl std::fmt::Display for SessionBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionBackendKind::Memory => write!(f, "memory"),
            SessionBackendKind::Database => write!(f, "database"),
        }
    }
}

/// Cookie `SameSite` policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameSitePolicy {
    /// `SameSite=Strict`
    Strict,
    /// `SameSite=Lax`
    #[default]
    Lax,
    /// `SameSite=None` (requires `secure_cookie`).
    None,
}

fn default_cookie_name() -> String {
    "sid".to_string()
}

fn default_ttl() -> u64 {
    24 * 60
}

fn default_max_sessions() -> u64 {
    100_000
}

fn default_cleanup_interval() -> u64 {
    15
}
