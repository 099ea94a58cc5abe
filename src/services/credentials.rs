//! Credential service
//!
//! Hashes and verifies passwords with salted Argon2id. Plaintext passwords
//! never leave this module.

use crate::config::CredentialsConfig;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

/// Errors raised while building the hasher or hashing a password
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Argon2 rejected the configured cost parameters
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(argon2::Error),

    /// Hashing the password failed
    #[error("Password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Password hashing service
#[derive(Debug, Clone)]
pub struct CredentialService {
    argon2: Argon2<'static>,
}

impl CredentialService {
    /// Build a service using the given cost parameters
    pub fn new(config: CredentialsConfig) -> Result<Self, CredentialError> {
        let params = Params::new(config.memory_kib, config.iterations, Params::DEFAULT_P_COST, None)
            .map_err(CredentialError::InvalidParams)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh random salt, returning the PHC string
    pub fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(CredentialError::Hash)?;
        Ok(hash.to_string())
    }

    /// Check a password against a stored PHC hash
    ///
    /// A malformed stored hash never verifies.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
