//! Password Hashing
//!
//! Salted PBKDF2-HMAC-SHA256 credential hashing. A stored credential is
//! `base64(salt) + "." + base64(derived_key)`; the salt is random per
//! credential, the derived key is 256 bits.
//!
//! The iteration count is a fixed crate constant and is not encoded in the
//! stored string. Verification always re-derives with the current constant,
//! so raising it invalidates every existing credential.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;

use crate::error::AuthError;

/// Salt byte length for password hashing.
const SALT_LEN: usize = 16;

/// Derived key byte length (256 bits).
const KEY_LEN: usize = 32;

/// Number of PBKDF2 iterations for password stretching.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Hash a password into a storable credential string.
///
/// Never fails; an empty password is valid input and produces a valid
/// (if weak) credential. The caller persists the result as an opaque
/// text column.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let key = derive_key(password, &salt);

    format!("{}.{}", STANDARD.encode(salt), STANDARD.encode(key))
}

/// Verify a password against a stored credential string.
///
/// Malformed input (missing delimiter, empty halves, bad base64) is a
/// verification failure, never an error.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_b64, key_b64)) = stored.split_once('.') else {
        return false;
    };
    if salt_b64.is_empty() || key_b64.is_empty() {
        return false;
    }

    let Ok(salt) = STANDARD.decode(salt_b64) else {
        tracing::debug!("Stored credential has undecodable salt");
        return false;
    };
    let Ok(stored_key) = STANDARD.decode(key_b64) else {
        tracing::debug!("Stored credential has undecodable key");
        return false;
    };

    let derived = derive_key(password, &salt);
    constant_time_eq(&derived, &stored_key)
}

/// Validate password strength
///
/// Requirements:
/// - At least 8 characters
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
pub fn validate_password_strength(password: &str) -> Result<(), AuthError> {
    if password.len() < 8 {
        return Err(AuthError::WeakPassword);
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_upper || !has_lower || !has_digit {
        return Err(AuthError::WeakPassword);
    }

    Ok(())
}

/// Derive a 256-bit key from a password and salt using PBKDF2-HMAC-SHA256.
fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("SecurePass123!");

        assert!(verify_password("SecurePass123!", &hash));
        assert!(!verify_password("WrongPassword1", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let h1 = hash_password("SecurePass123!");
        let h2 = hash_password("SecurePass123!");

        // Random salt means the strings differ, but both still verify
        assert_ne!(h1, h2);
        assert!(verify_password("SecurePass123!", &h1));
        assert!(verify_password("SecurePass123!", &h2));
    }

    #[test]
    fn empty_password_is_valid_input() {
        let hash = hash_password("");

        assert!(verify_password("", &hash));
        assert!(!verify_password("not-empty", &hash));
    }

    #[test]
    fn malformed_stored_credential_fails_verification() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "nodothere"));
        assert!(!verify_password("anything", ".leadingdot"));
        assert!(!verify_password("anything", "trailingdot."));
        assert!(!verify_password("anything", "not base64!.also not@"));
    }

    #[test]
    fn stored_format_decodes_and_rederives() {
        let hash = hash_password("SecurePass123!");
        let (salt_b64, key_b64) = hash.split_once('.').unwrap();

        let salt = STANDARD.decode(salt_b64).unwrap();
        let key = STANDARD.decode(key_b64).unwrap();
        assert_eq!(salt.len(), SALT_LEN);
        assert_eq!(key.len(), KEY_LEN);

        // Re-deriving with the same salt reproduces the stored key exactly
        let rederived = derive_key("SecurePass123!", &salt);
        assert_eq!(rederived.as_slice(), key.as_slice());
    }

    #[test]
    fn derive_key_is_deterministic() {
        let salt = [42u8; SALT_LEN];
        let key1 = derive_key("my-password", &salt);
        let key2 = derive_key("my-password", &salt);
        assert_eq!(key1, key2);

        // Different password → different key
        let key3 = derive_key("other-password", &salt);
        assert_ne!(key1, key3);

        // Different salt → different key
        let salt2 = [99u8; SALT_LEN];
        let key4 = derive_key("my-password", &salt2);
        assert_ne!(key1, key4);
    }

    #[test]
    fn password_strength_validation() {
        assert!(validate_password_strength("SecurePass1").is_ok());
        assert!(validate_password_strength("MyP@ssw0rd").is_ok());

        // Too short
        assert!(validate_password_strength("Pass1").is_err());

        // No uppercase
        assert!(validate_password_strength("password123").is_err());

        // No lowercase
        assert!(validate_password_strength("PASSWORD123").is_err());

        // No digit
        assert!(validate_password_strength("SecurePassword").is_err());
    }

    #[test]
    fn constant_time_eq_works() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
    }
}
