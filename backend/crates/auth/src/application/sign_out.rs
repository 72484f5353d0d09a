//! Sign Out Use Case
//!
//! Deletes the server-side session row. Idempotent: signing out an
//! already-invalid token is a no-op.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        if let Some(session_id) = session_token::verify(token, &self.config.session_secret) {
            self.session_repo.delete(session_id).await?;
            tracing::info!(session_id = %session_id, "User signed out");
        }

        Ok(())
    }
}
