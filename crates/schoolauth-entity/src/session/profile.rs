//! Public profile snapshot returned by login and session checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Denormalized copy of the user's display fields, taken at login time.
///
/// This is also the exact JSON shape clients receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    /// User identifier.
    pub user_id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login handle.
    pub login: String,
    /// Email address.
    pub email: String,
    /// School identifier.
    pub school_id: String,
    /// Role label.
    pub role: String,
    /// Avatar URL.
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    /// Preferred UI language.
    pub language: Option<String>,
    /// Preferred UI theme.
    pub theme: Option<String>,
    /// Account status label.
    pub status: String,
}
