//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Authenticated user stored in request extensions by `require_session`
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid session
///
/// On success the resolved `CurrentUser` is inserted into request
/// extensions for downstream handlers. All rejection paths get the
/// same 401 with the `X-Auth-Required` marker header.
pub async fn require_session<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let user = match token {
        Some(token) => match use_case.current_user(&token).await {
            Ok(user) => user,
            Err(e) => return Err(e.into_response()),
        },
        None => None,
    };

    match user {
        Some(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        None => Err((StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response()),
    }
}
