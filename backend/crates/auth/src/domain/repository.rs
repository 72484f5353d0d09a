//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    credential::LocalCredential, federated_identity::FederatedIdentity, session::Session,
    user::User,
};
use crate::domain::value_object::{email::Email, provider::Provider, user_id::UserId};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Update user (secret, last login)
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Local credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Create a user together with its local credential, atomically
    ///
    /// Returns `AuthError::IdentifierTaken` when the email is already
    /// registered, including when a concurrent registration won the race.
    async fn create_local(&self, user: &User, credential: &LocalCredential) -> AuthResult<()>;

    /// Find credential by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<LocalCredential>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Federated identity repository trait
#[trait_variant::make(FederatedIdentityRepository: Send)]
pub trait LocalFederatedIdentityRepository {
    /// Find the user owning a (provider, subject) identity
    async fn find_user_by_identity(
        &self,
        provider: Provider,
        subject_id: &str,
    ) -> AuthResult<Option<User>>;

    /// Create a user together with its federated identity, atomically
    ///
    /// Returns `Ok(false)` when a concurrent request created the same
    /// identity first; the caller retries as a find.
    async fn create_federated(
        &self,
        user: &User,
        identity: &FederatedIdentity,
    ) -> AuthResult<bool>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;
}
