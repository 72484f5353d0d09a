//! Local Credential Entity
//!
//! Email + password hash for locally registered accounts. The email
//! uniqueness constraint lives here, not on the user: federated
//! accounts carry no email and never collide with local identifiers.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};

/// Local (email + password) credential
#[derive(Debug, Clone)]
pub struct LocalCredential {
    /// Owning user
    pub user_id: UserId,
    /// Login identifier (unique among local accounts)
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl LocalCredential {
    pub fn new(user_id: UserId, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
