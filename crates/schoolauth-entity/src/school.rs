//! School registry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A school users can register against.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct School {
    /// Ten-digit numeric identifier.
    pub school_id: String,
    /// When the school was added to the registry.
    pub created_at: DateTime<Utc>,
}
