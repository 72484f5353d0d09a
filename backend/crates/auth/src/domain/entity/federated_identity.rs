//! Federated Identity Entity
//!
//! Links an external (provider, subject) pair to a local user. The
//! pair is the primary key; a subject authenticated by one provider is
//! a different identity from the same subject at another provider.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{provider::Provider, user_id::UserId};

/// Federated identity owned by a user
#[derive(Debug, Clone)]
pub struct FederatedIdentity {
    /// Identity provider
    pub provider: Provider,
    /// Provider-scoped subject identifier
    pub subject_id: String,
    /// Owning user
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl FederatedIdentity {
    pub fn new(provider: Provider, subject_id: String, user_id: UserId) -> Self {
        Self {
            provider,
            subject_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
