//! The single provisioned HTTP Basic account.

use crm_core::config::SecurityConfig;
use crm_core::error::AppError;

use crate::password::PasswordHasher;

/// Username plus salted password hash, built once at startup.
///
/// The plaintext password never outlives [`BasicCredential::provision`].
#[derive(Debug, Clone)]
pub struct BasicCredential {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
}

impl BasicCredential {
    /// Hash `password` and keep it alongside `username`.
    pub fn provision(username: &str, password: &str) -> Result<Self, AppError> {
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash_password(password)?;
        Ok(Self {
            username: username.to_string(),
            password_hash,
            hasher,
        })
    }

    /// Provision the account named in the security configuration.
    pub fn from_config(config: &SecurityConfig) -> Result<Self, AppError> {
        Self::provision(&config.username, &config.password)
    }

    /// The account's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a submitted username/password pair.
    ///
    /// The hash is checked even when the username is wrong, so timing does
    /// not reveal which part failed. Argon2 is slow; call this off the async
    /// executor.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let password_ok = self.hasher.verify_password(password, &self.password_hash)?;
        Ok(password_ok && username == self.username)
    }
}
