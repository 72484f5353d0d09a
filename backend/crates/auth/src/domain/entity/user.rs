//! User Entity
//!
//! Core user entity. Login credentials live in separate entities
//! (`LocalCredential`, `FederatedIdentity`); a user may hold either.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{public_id::PublicId, user_id::UserId};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// The user's stored secret text, if submitted
    pub secret: Option<String>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no secret
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            secret: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Replace the stored secret (unconditional overwrite)
    pub fn set_secret(&mut self, secret: String) {
        self.secret = Some(secret);
        self.updated_at = Utc::now();
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_secret() {
        let user = User::new();
        assert!(user.secret.is_none());
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_set_secret_overwrites() {
        let mut user = User::new();
        user.set_secret("first".to_string());
        user.set_secret("second".to_string());
        assert_eq!(user.secret.as_deref(), Some("second"));
    }

    #[test]
    fn test_record_login() {
        let mut user = User::new();
        user.record_login();
        assert!(user.last_login_at.is_some());
    }
}
