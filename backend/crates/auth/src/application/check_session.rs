//! Check Session Use Case
//!
//! Resolves a session token to its user. A missing, tampered, or
//! signed-out token resolves to `Ok(None)`, never an error: absence of
//! a session is a normal state, not a failure.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Resolve a token to the authenticated user
    ///
    /// `Ok(None)` covers every non-authenticated case: bad signature,
    /// deleted session, deleted user. Errors are reserved for storage
    /// failures.
    pub async fn current_user(&self, token: &str) -> AuthResult<Option<User>> {
        let Some(session_id) = session_token::verify(token, &self.config.session_secret) else {
            return Ok(None);
        };

        let Some(session) = self.session_repo.find_by_id(session_id).await? else {
            return Ok(None);
        };

        self.user_repo.find_by_id(&session.user_id).await
    }

    /// Check whether a token resolves to a live session
    pub async fn is_authenticated(&self, token: &str) -> AuthResult<bool> {
        Ok(self.current_user(token).await?.is_some())
    }
}
