//! Register Use Case
//!
//! Creates a local account from an email identifier and a password.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credential::LocalCredential, user::User};
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{email::Email, user_password::{RawPassword, UserPassword}};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    /// Email identifier
    pub identifier: String,
    /// Clear-text password
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    /// Public ID of the created user
    pub public_id: String,
}

/// Register use case
pub struct RegisterUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> RegisterUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(&input.identifier)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Early check for a friendly error; the unique constraint in
        // create_local still catches concurrent registrations.
        if self.credential_repo.exists_by_email(&email).await? {
            return Err(AuthError::IdentifierTaken);
        }

        // Argon2id is CPU-bound; keep it off the async workers
        let pepper = self.config.password_pepper.clone();
        let password_hash =
            tokio::task::spawn_blocking(move || {
                UserPassword::from_raw(&raw_password, pepper.as_deref())
            })
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new();
        let credential = LocalCredential::new(user.user_id, email, password_hash);

        self.credential_repo.create_local(&user, &credential).await?;

        tracing::info!(public_id = %user.public_id, "User registered");

        Ok(RegisterOutput {
            public_id: user.public_id.to_string(),
        })
    }
}
