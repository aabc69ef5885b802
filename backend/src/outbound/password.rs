//! Salted SHA-256 password service adapter.

use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::domain::ports::{PasswordService, PasswordServiceError};

const SALT_BYTES: usize = 16;

/// Hashes passwords as `hex(salt)$hex(sha256(salt || password))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordService;

impl Sha256PasswordService {
    pub fn new() -> Self {
        Self
    }

    fn digest(salt: &[u8], plain: &str) -> String {
        let mut preimage = Vec::with_capacity(salt.len() + plain.len());
        preimage.extend_from_slice(salt);
        preimage.extend_from_slice(plain.as_bytes());
        let digest = hex::encode(Sha256::digest(&preimage));
        preimage.zeroize();
        digest
    }
}

impl PasswordService for Sha256PasswordService {
    fn hash(&self, plain: &str) -> Result<String, PasswordServiceError> {
        let mut salt = [0u8; SALT_BYTES];
        rand::thread_rng().fill_bytes(&mut salt);
        Ok(format!(
            "{}${}",
            hex::encode(salt),
            Self::digest(&salt, plain)
        ))
    }

    fn verify(&self, plain: &str, hashed: &str) -> bool {
        let Some((salt_hex, digest_hex)) = hashed.split_once('$') else {
            return false;
        };
        let Ok(salt) = hex::decode(salt_hex) else {
            return false;
        };
        Self::digest(&salt, plain) == digest_hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_echoes_the_plaintext() {
        let service = Sha256PasswordService::new();
        let hashed = service.hash("hunter2").expect("hash succeeds");
        assert!(!hashed.contains("hunter2"));
    }

    #[test]
    fn verify_accepts_the_original_password_only() {
        let service = Sha256PasswordService::new();
        let hashed = service.hash("hunter2").expect("hash succeeds");

        assert!(service.verify("hunter2", &hashed));
        assert!(!service.verify("hunter3", &hashed));
    }

    #[test]
    fn repeated_hashes_differ_by_salt_yet_both_verify() {
        let service = Sha256PasswordService::new();
        let first = service.hash("hunter2").expect("hash succeeds");
        let second = service.hash("hunter2").expect("hash succeeds");

        assert_ne!(first, second);
        assert!(service.verify("hunter2", &first));
        assert!(service.verify("hunter2", &second));
    }

    #[test]
    fn verify_rejects_malformed_hash_material() {
        let service = Sha256PasswordService::new();
        assert!(!service.verify("hunter2", "no-separator"));
        assert!(!service.verify("hunter2", "zz-not-hex$abcdef"));
    }
}
