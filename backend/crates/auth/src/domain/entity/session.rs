//! Session Entity
//!
//! Server-side session record. Presence of the row is what makes a
//! session valid; sign-out deletes it, which invalidates every copy of
//! the token immediately.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier (random UUID, signed into the cookie token)
    pub session_id: Uuid,
    /// Owning user
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
