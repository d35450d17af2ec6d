//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use schoolauth_core::config::AuthConfig;
use schoolauth_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// The async variants move the work onto the blocking thread pool so a
/// slow hash never stalls the runtime.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the cost parameters from configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// The result is a PHC string carrying algorithm, cost and salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored PHC string.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not. A
    /// stored hash that cannot be parsed is an internal error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// [`hash_password`](Self::hash_password) on the blocking pool.
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password)).await?
    }

    /// [`verify_password`](Self::verify_password) on the blocking pool.
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash)).await?
    }

    /// Spend one hash computation and discard the result.
    ///
    /// Used when a login names no known user, so that the response takes
    /// about as long as a wrong password would.
    pub async fn equalize_timing(&self, password: String) -> Result<(), AppError> {
        self.hash(password).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::new(&AuthConfig {
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
            argon2_parallelism: 1,
            ..AuthConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = cheap_hasher();
        let hash = hasher.hash_password("Passw0rd!").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("Passw0rd!"));
        assert!(hasher.verify_password("Passw0rd!", &hash).unwrap());
        assert!(!hasher.verify_password("Passw0rd?", &hash).unwrap());
    }

    #[test]
    fn test_salt_is_random() {
        let hasher = cheap_hasher();
        let a = hasher.hash_password("Passw0rd!").unwrap();
        let b = hasher.hash_password("Passw0rd!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = cheap_hasher();
        assert!(hasher.verify_password("Passw0rd!", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = AuthConfig {
            argon2_iterations: 0,
            ..AuthConfig::default()
        };
        let err = PasswordHasher::new(&config).unwrap_err();
        assert_eq!(err.kind, schoolauth_core::ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let hasher = cheap_hasher();
        let hash = hasher.hash("Passw0rd!".to_string()).await.unwrap();
        assert!(hasher.verify("Passw0rd!".to_string(), hash).await.unwrap());
        hasher.equalize_timing("anything".to_string()).await.unwrap();
    }
}
