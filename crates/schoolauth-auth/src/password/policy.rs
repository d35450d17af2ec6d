//! Password strength rules.

use schoolauth_core::error::AppError;

/// Symbols accepted as the "special character" of a password.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Checks a password against the composition rules.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// Minimum length in characters.
    pub const MIN_LENGTH: usize = 8;

    /// Create the standard policy.
    pub fn new() -> Self {
        Self {
            min_length: Self::MIN_LENGTH,
        }
    }

    /// Whether the password satisfies every rule.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
    }

    /// Validate the password, failing with `bad_data`.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if self.is_satisfied_by(password) {
            Ok(())
        } else {
            Err(AppError::bad_data("Password does not meet the strength rules"))
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}
