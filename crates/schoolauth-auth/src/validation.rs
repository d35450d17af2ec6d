//! Field rules for registration and login input.
//!
//! Rules are checked in a fixed order and the first failure decides the
//! error code: a bad school identifier is `bad_school`, anything else is
//! `bad_data`.

use std::sync::LazyLock;

use regex::Regex;

use schoolauth_core::error::AppError;
use schoolauth_entity::user::Registration;

use crate::password::PasswordPolicy;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Polish diacritics accepted in personal names.
const POLISH_LETTERS: &str = "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ";

const SCHOOL_ID_LENGTH: usize = 10;
const NAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=50;
const LOGIN_LENGTH: std::ops::RangeInclusive<usize> = 3..=50;
const EMAIL_MAX_LENGTH: usize = 100;

/// Validates user-supplied credentials.
#[derive(Debug, Clone, Default)]
pub struct CredentialValidator {
    policy: PasswordPolicy,
}

impl CredentialValidator {
    /// Create a validator using the given password policy.
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Validate every registration field in order.
    pub fn validate_registration(&self, input: &Registration) -> Result<(), AppError> {
        if !is_valid_school_id(&input.school_id) {
            return Err(AppError::bad_school("School identifier must be 10 digits"));
        }
        if !is_valid_name(&input.first_name) {
            return Err(AppError::bad_data("Invalid first name"));
        }
        if !is_valid_name(&input.last_name) {
            return Err(AppError::bad_data("Invalid last name"));
        }
        if !is_valid_email(&input.email) {
            return Err(AppError::bad_data("Invalid email"));
        }
        if !is_valid_login(&input.login) {
            return Err(AppError::bad_data("Invalid login"));
        }
        self.policy.validate(&input.password)
    }

    /// Validate login input before any lookup happens.
    pub fn validate_login(&self, login: &str, password: &str) -> Result<(), AppError> {
        if !is_valid_login(login) {
            return Err(AppError::bad_data("Invalid login"));
        }
        self.policy.validate(password)
    }
}

/// Exactly ten ASCII digits.
pub fn is_valid_school_id(value: &str) -> bool {
    value.len() == SCHOOL_ID_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

/// 3 to 50 letters, ASCII or Polish.
pub fn is_valid_name(value: &str) -> bool {
    NAME_LENGTH.contains(&value.chars().count())
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || POLISH_LETTERS.contains(c))
}

/// 3 to 50 ASCII letters or digits.
pub fn is_valid_login(value: &str) -> bool {
    LOGIN_LENGTH.contains(&value.chars().count()) && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// At most 100 characters, `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    value.chars().count() <= EMAIL_MAX_LENGTH && EMAIL_PATTERN.is_match(value)
}
