//! Port for password hashing.

use super::define_port_error;

define_port_error! {
    /// Failures raised by password service adapters.
    pub enum PasswordServiceError {
        /// The underlying hash primitive failed.
        Hashing => "password hashing failed: {message}",
    }
}

/// Boundary to the password hashing scheme.
///
/// Handlers never persist plaintext; `hash` runs before any repository call.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordService: Send + Sync {
    /// Hash a plaintext password for storage.
    fn hash(&self, plain: &str) -> Result<String, PasswordServiceError>;

    /// Check a plaintext password against stored hash material.
    fn verify(&self, plain: &str, hashed: &str) -> bool;
}

/// Stub service with a transparent, reversible "hash" for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordService;

impl PasswordService for FixturePasswordService {
    fn hash(&self, plain: &str) -> Result<String, PasswordServiceError> {
        Ok(format!("hashed:{plain}"))
    }

    fn verify(&self, plain: &str, hashed: &str) -> bool {
        hashed == format!("hashed:{plain}")
    }
}
