//! Password hashing primitive for the user directory.
//!
//! Wraps Argon2id with per-password random salts behind two functions so the
//! rest of the crate never touches the hashing library directly. Stored
//! hashes are PHC strings, opaque to every other module.

use crate::errors::{Error, Result};
use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};

/// Hashes a plaintext password with Argon2id and a freshly generated salt.
///
/// Returns the PHC string encoding of the hash, which embeds the salt and
/// parameters needed for later verification.
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash {
            message: e.to_string(),
        })?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// Returns `Ok(false)` for a well-formed hash that does not match; a hash
/// that cannot be parsed at all is an error, since it means the stored
/// credential is corrupt rather than merely wrong.
pub fn verify_password(hash: &str, plaintext: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| Error::PasswordHash {
        message: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_correct_password_verifies() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password(&hash, "correct horse battery staple").unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(!verify_password(&hash, "hunter3").unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Random salts mean two registrations with the same password must
        // not produce identical stored hashes.
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_corrupt_hash_is_an_error() {
        let result = verify_password("not-a-phc-string", "hunter2");
        assert!(matches!(
            result.unwrap_err(),
            Error::PasswordHash { message: _ }
        ));
    }
}
