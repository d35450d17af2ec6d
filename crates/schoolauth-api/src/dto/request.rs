//! Request DTOs.
//!
//! Missing fields deserialize as empty strings and are rejected by the
//! field rules rather than by the JSON layer.

use std::fmt;

use serde::Deserialize;

use schoolauth_entity::user::Registration;

/// `POST /api/register` body.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    /// Ten-digit school identifier.
    pub school_id: String,
    /// First name.
    pub name: String,
    /// Last name.
    pub last_name: String,
    /// Desired login.
    pub login: String,
    /// Plaintext password.
    pub password: String,
    /// Email address.
    pub email: String,
    /// Role label.
    pub role: String,
    /// Status label.
    pub status: String,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Registration {
            school_id: req.school_id,
            first_name: req.name,
            last_name: req.last_name,
            login: req.login,
            password: req.password,
            email: req.email,
            role: req.role,
            status: req.status,
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("school_id", &self.school_id)
            .field("login", &self.login)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// `POST /api/login` body.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Login handle.
    pub login: String,
    /// Plaintext password.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_wire_names() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"schoolId":"1234567890","name":"Anna","lastName":"Kowalska",
                "login":"annak","password":"Passw0rd!","email":"a@b.com",
                "role":"student","status":"active"}"#,
        )
        .unwrap();

        let reg = Registration::from(req);
        assert_eq!(reg.school_id, "1234567890");
        assert_eq!(reg.first_name, "Anna");
        assert_eq!(reg.last_name, "Kowalska");
        assert_eq!(reg.role, "student");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: LoginRequest = serde_json::from_str(r#"{"login":"annak"}"#).unwrap();
        assert_eq!(req.login, "annak");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_debug_omits_password() {
        let req = LoginRequest {
            login: "annak".to_string(),
            password: "Passw0rd!".to_string(),
        };
        assert!(!format!("{req:?}").contains("Passw0rd!"));
    }
}
