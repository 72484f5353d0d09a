//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{
    CredentialRepository, FederatedIdentityRepository, SessionRepository, UserRepository,
};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{self, AuthMiddlewareState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository
        + CredentialRepository
        + FederatedIdentityRepository
        + SessionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let mw_state = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let protected = Router::new()
        .route(
            "/secret",
            get(handlers::view_secret).put(handlers::submit_secret::<R>),
        )
        .route_layer(axum::middleware::from_fn(move |req, next| {
            let mw_state = mw_state.clone();
            async move { middleware::require_session(mw_state, req, next).await }
        }));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/federated/{provider}", post(handlers::federated_sign_in::<R>))
        .route("/signout", post(handlers::sign_out::<R>))
        .route("/status", get(handlers::session_status::<R>))
        .merge(protected)
        .with_state(state)
}
