//! Password Value Objects
//!
//! Domain wrappers around the platform password primitives.
//! `RawPassword` is a validated clear-text password that is zeroized
//! on drop; `UserPassword` is the stored Argon2id PHC string.

use std::fmt;

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

/// Validated clear-text password (zeroized on drop, never stored)
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate and wrap a raw password string
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Stored password hash (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword {
    hash: HashedPassword,
}

impl UserPassword {
    /// Hash a raw password for storage
    ///
    /// Hashing is CPU-bound; callers on the async path run this inside
    /// `spawn_blocking`.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        Ok(Self {
            hash: raw.0.hash(pepper)?,
        })
    }

    /// Wrap a PHC string loaded from the database
    ///
    /// Not validated here: a corrupt stored hash fails verification
    /// instead of failing the load.
    pub fn from_db(phc: impl Into<String>) -> Self {
        Self {
            hash: HashedPassword::from_storage(phc),
        }
    }

    /// Get the PHC string for storage
    pub fn as_str(&self) -> &str {
        self.hash.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// Returns false for any mismatch, including a malformed stored
    /// hash. Never an error.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.hash.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword").field("hash", &"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("correct horse battery".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        assert!(stored.verify(&raw, None));

        let wrong = RawPassword::new("wrong horse battery".to_string()).unwrap();
        assert!(!stored.verify(&wrong, None));
    }

    #[test]
    fn test_db_roundtrip() {
        let raw = RawPassword::new("correct horse battery".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        let restored = UserPassword::from_db(stored.as_str().to_string());
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_malformed_stored_hash() {
        let raw = RawPassword::new("correct horse battery".to_string()).unwrap();
        let corrupt = UserPassword::from_db("not-a-phc-string");
        assert!(!corrupt.verify(&raw, None));
    }

    #[test]
    fn test_policy_rejects_short() {
        assert!(RawPassword::new("short".to_string()).is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("super secret pw".to_string()).unwrap();
        let output = format!("{:?}", raw);
        assert!(!output.contains("super secret"));
    }
}
