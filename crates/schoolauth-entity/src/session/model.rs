//! Session record held by the session backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::SessionProfile;

/// Server-side state behind a session handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// Set once credentials have been verified.
    pub logged_in: bool,
    /// Snapshot of the user's display fields.
    pub profile: SessionProfile,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session stops being honoured.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Build a logged-in record for a freshly verified user.
    pub fn logged_in(profile: SessionProfile, created_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: profile.user_id,
            logged_in: true,
            profile,
            created_at,
            expires_at,
        }
    }

    /// Whether the record still represents an authenticated session at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.logged_in && self.expires_at > now
    }
}
