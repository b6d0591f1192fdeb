//! Password hashing with bcrypt.

use crate::errors::{DomainError, DomainResult};

/// One-way salted hasher for passwords and application secrets.
///
/// bcrypt generates a fresh salt per hash and its verification routine is
/// resistant to timing analysis; the work factor makes brute-forcing a
/// leaked hash expensive.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt work factor.
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit work factor. Tests use
    /// `4` to stay fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext value.
    ///
    /// Fails only on catastrophic conditions (entropy exhaustion, invalid
    /// cost); such failures are internal, never caller-visible detail.
    pub fn hash(&self, plain: &str) -> DomainResult<Vec<u8>> {
        bcrypt::hash(plain, self.cost)
            .map(String::into_bytes)
            .map_err(|e| DomainError::internal("password.hash", e))
    }

    /// Check a plaintext value against a stored hash.
    ///
    /// A malformed or non-UTF-8 stored hash reads as a mismatch rather than
    /// an error; the caller cannot distinguish the two.
    pub fn verify(&self, plain: &str, stored: &[u8]) -> bool {
        match std::str::from_utf8(stored) {
            Ok(hash) => matches!(bcrypt::verify(plain, hash), Ok(true)),
            Err(_) => false,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash("P@ssw0rd1").unwrap();

        assert!(hasher.verify("P@ssw0rd1", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = fast_hasher();
        let first = hasher.hash("P@ssw0rd1").unwrap();
        let second = hasher.hash("P@ssw0rd1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("P@ssw0rd1", &first));
        assert!(hasher.verify("P@ssw0rd1", &second));
    }

    #[test]
    fn test_malformed_stored_hash_is_mismatch() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("P@ssw0rd1", b"not-a-bcrypt-hash"));
        assert!(!hasher.verify("P@ssw0rd1", &[0xff, 0xfe, 0xfd]));
    }
}
