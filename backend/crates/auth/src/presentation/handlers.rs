//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::{AuthConfig, SameSite};
use crate::application::{
    AuthenticateUseCase, CheckSessionUseCase, Credentials, RegisterInput, RegisterUseCase,
    SignOutUseCase, SubmitSecretUseCase,
};
use crate::domain::repository::{
    CredentialRepository, FederatedIdentityRepository, SessionRepository, UserRepository,
};
use crate::domain::value_object::provider::Provider;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    FederatedSignInRequest, RegisterRequest, RegisterResponse, SecretResponse,
    SessionStatusResponse, SignInRequest, SignInResponse, SubmitSecretRequest,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
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
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
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
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        identifier: req.identifier,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            public_id: output.public_id,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
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
    let use_case = AuthenticateUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(Credentials::Local {
            identifier: req.identifier,
            password: req.password,
        })
        .await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            public_id: output.public_id,
        }),
    ))
}

// ============================================================================
// Federated Sign In
// ============================================================================

/// POST /api/auth/federated/{provider}
pub async fn federated_sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Path(provider): Path<String>,
    Json(req): Json<FederatedSignInRequest>,
) -> AuthResult<impl IntoResponse>
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
    let provider: Provider = provider
        .parse()
        .map_err(|e: kernel::error::app_error::AppError| {
            AuthError::Validation(e.message().to_string())
        })?;

    let use_case = AuthenticateUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(Credentials::Federated {
            provider,
            subject_id: req.subject_id,
        })
        .await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            public_id: output.public_id,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
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
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Malformed and already-deleted tokens are a no-op inside the
        // use case; a storage fault propagates instead of reporting a
        // logout that did not happen
        use_case.execute(&token).await?;
    }

    let cookie = build_clear_cookie(&state.config);

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
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
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let user = match token {
        Some(token) => use_case.current_user(&token).await?,
        None => None,
    };

    match user {
        Some(user) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            public_id: Some(user.public_id.to_string()),
        })),
        None => Ok(Json(SessionStatusResponse {
            authenticated: false,
            public_id: None,
        })),
    }
}

// ============================================================================
// Secret (requires authentication)
// ============================================================================

/// GET /api/auth/secret
pub async fn view_secret(
    axum::Extension(current): axum::Extension<CurrentUser>,
) -> Json<SecretResponse> {
    Json(SecretResponse {
        secret: current.0.secret,
    })
}

/// PUT /api/auth/secret
pub async fn submit_secret<R>(
    State(state): State<AuthAppState<R>>,
    axum::Extension(current): axum::Extension<CurrentUser>,
    Json(req): Json<SubmitSecretRequest>,
) -> AuthResult<StatusCode>
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
    let use_case = SubmitSecretUseCase::new(state.repo.clone());

    use_case.execute(current.0.user_id, req.secret).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

fn build_session_cookie(config: &AuthConfig, token: &str) -> String {
    let mut parts = vec![
        format!("{}={}", config.session_cookie_name, token),
        "HttpOnly".to_string(),
        "Path=/".to_string(),
    ];

    if let Some(max_age) = config.cookie_max_age {
        parts.push(format!("Max-Age={}", max_age.as_secs()));
    }

    if config.cookie_secure {
        parts.push("Secure".to_string());
    }

    match config.cookie_same_site {
        SameSite::Strict => parts.push("SameSite=Strict".to_string()),
        SameSite::Lax => parts.push("SameSite=Lax".to_string()),
        SameSite::None => parts.push("SameSite=None".to_string()),
    }

    parts.join("; ")
}

fn build_clear_cookie(config: &AuthConfig) -> String {
    let mut parts = vec![
        format!("{}=", config.session_cookie_name),
        "HttpOnly".to_string(),
        "Path=/".to_string(),
        "Max-Age=0".to_string(),
        "Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string(),
    ];

    if config.cookie_secure {
        parts.push("Secure".to_string());
    }

    match config.cookie_same_site {
        SameSite::Strict => parts.push("SameSite=Strict".to_string()),
        SameSite::Lax => parts.push("SameSite=Lax".to_string()),
        SameSite::None => parts.push("SameSite=None".to_string()),
    }

    parts.join("; ")
}
