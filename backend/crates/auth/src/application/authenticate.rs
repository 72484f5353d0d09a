//! Authenticate Use Case
//!
//! Single entry point for establishing a session, whether the caller
//! presents local credentials or a federated identity assertion.
//! Historically these were separate flows with diverging session
//! handling; both now funnel through one `execute`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::{federated_identity::FederatedIdentity, session::Session, user::User};
use crate::domain::repository::{
    CredentialRepository, FederatedIdentityRepository, SessionRepository, UserRepository,
};
use crate::domain::value_object::{
    email::Email,
    provider::Provider,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Credentials presented for authentication
pub enum Credentials {
    /// Email + password for a locally registered account
    Local { identifier: String, password: String },
    /// Verified assertion from an external identity provider
    Federated { provider: Provider, subject_id: String },
}

/// Authenticate output
pub struct AuthOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Public ID
    pub public_id: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U, C, F, S>
where
    U: UserRepository,
    C: CredentialRepository,
    F: FederatedIdentityRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    identity_repo: Arc<F>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, F, S> AuthenticateUseCase<U, C, F, S>
where
    U: UserRepository,
    C: CredentialRepository,
    F: FederatedIdentityRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        identity_repo: Arc<F>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            identity_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, credentials: Credentials) -> AuthResult<AuthOutput> {
        let mut user = match credentials {
            Credentials::Local {
                identifier,
                password,
            } => self.authenticate_local(identifier, password).await?,
            Credentials::Federated {
                provider,
                subject_id,
            } => self.find_or_create_federated(provider, subject_id).await?,
        };

        user.record_login();
        self.user_repo.update(&user).await?;

        let session = Session::new(user.user_id);
        self.session_repo.create(&session).await?;

        let session_token = session_token::sign(session.session_id, &self.config.session_secret);

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(AuthOutput {
            session_token,
            public_id: user.public_id.to_string(),
        })
    }

    /// Verify email + password against the stored credential
    ///
    /// Unknown identifier, missing credential, and wrong password all
    /// collapse into `InvalidCredentials`.
    async fn authenticate_local(&self, identifier: String, password: String) -> AuthResult<User> {
        let email = Email::new(&identifier).map_err(|_| AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let credential = self.credential_repo.find_by_email(&email).await?;

        // Unknown identifiers verify against a fixed dummy hash so the
        // miss path pays the same Argon2 cost as a wrong password
        let stored = match &credential {
            Some(credential) => credential.password_hash.clone(),
            None => UserPassword::from_db(platform::password::DUMMY_PHC_HASH),
        };

        // Argon2id verification is CPU-bound; keep it off the async workers
        let pepper = self.config.password_pepper.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || stored.verify(&raw_password, pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        let credential = credential
            .filter(|_| password_valid)
            .ok_or(AuthError::InvalidCredentials)?;

        self.user_repo
            .find_by_id(&credential.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Find the user owning a federated identity, creating one on
    /// first sign-in
    ///
    /// Concurrent first sign-ins race on the (provider, subject)
    /// uniqueness constraint; the loser retries as a find, so both
    /// requests resolve to the same single user.
    async fn find_or_create_federated(
        &self,
        provider: Provider,
        subject_id: String,
    ) -> AuthResult<User> {
        if subject_id.trim().is_empty() {
            return Err(AuthError::Validation(
                "Subject identifier cannot be empty".to_string(),
            ));
        }

        for _ in 0..2 {
            if let Some(user) = self
                .identity_repo
                .find_user_by_identity(provider, &subject_id)
                .await?
            {
                return Ok(user);
            }

            let user = User::new();
            let identity = FederatedIdentity::new(provider, subject_id.clone(), user.user_id);

            if self.identity_repo.create_federated(&user, &identity).await? {
                tracing::info!(
                    public_id = %user.public_id,
                    provider = %provider,
                    "Federated user created"
                );
                return Ok(user);
            }

            // Lost the creation race; loop back and find the winner's row
        }

        Err(AuthError::Internal(
            "Federated find-or-create did not converge".to_string(),
        ))
    }
}
