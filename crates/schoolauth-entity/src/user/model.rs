//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::session::SessionProfile;

/// A registered user, as stored in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique login handle.
    pub login: String,
    /// Argon2id PHC string. Never the plaintext password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Unique email address.
    pub email: String,
    /// The school this user registered against.
    pub school_id: String,
    /// Free-form role label.
    pub role: String,
    /// Free-form account status label.
    pub status: String,
    /// Avatar URL.
    pub photo_url: Option<String>,
    /// Preferred UI language.
    pub language: Option<String>,
    /// Preferred UI theme.
    pub theme: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build the denormalized snapshot stored in a session.
    pub fn profile(&self) -> SessionProfile {
        SessionProfile {
            user_id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            login: self.login.clone(),
            email: self.email.clone(),
            school_id: self.school_id.clone(),
            role: self.role.clone(),
            photo_url: self.photo_url.clone(),
            language: self.language.clone(),
            theme: self.theme.clone(),
            status: self.status.clone(),
        }
    }
}

/// Data required to insert a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Server-generated identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login handle.
    pub login: String,
    /// Pre-hashed password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Email address.
    pub email: String,
    /// Referenced school.
    pub school_id: String,
    /// Role label.
    pub role: String,
    /// Status label.
    pub status: String,
}

impl NewUser {
    /// Materialize the row the store will hold after a successful insert.
    pub fn into_user(self, created_at: DateTime<Utc>) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            login: self.login,
            password_hash: self.password_hash,
            email: self.email,
            school_id: self.school_id,
            role: self.role,
            status: self.status,
            photo_url: None,
            language: None,
            theme: None,
            created_at,
        }
    }
}
