//! Submit Secret Use Case
//!
//! Stores the caller's secret text, replacing any previous one.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Submit secret use case
pub struct SubmitSecretUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SubmitSecretUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId, secret: String) -> AuthResult<()> {
        let mut user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        user.set_secret(secret);
        self.user_repo.update(&user).await?;

        tracing::info!(public_id = %user.public_id, "Secret updated");

        Ok(())
    }
}
