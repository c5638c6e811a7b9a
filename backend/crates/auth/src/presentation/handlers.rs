//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UpdateUserInput,
    UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::presentation::middleware::AuthUser;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Registration
// ============================================================================

/// POST /api/users
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = RegisterInput {
        username: req.user.username,
        email: req.user.email,
        password: req.user.password,
    };

    let output = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(output))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = LoginInput {
        email: req.user.email,
        password: req.user.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(UserResponse::from(output)))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/user
///
/// Returns the authenticated account with a freshly issued token.
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(auth): Extension<AuthUser>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case.execute(&auth.user_id).await?;

    Ok(Json(UserResponse::from(output)))
}

// ============================================================================
// Update User
// ============================================================================

/// PUT /api/user
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<UpdateUserRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = UpdateUserInput {
        email: req.user.email,
        username: req.user.username,
        password: req.user.password,
        bio: req.user.bio,
        image: req.user.image,
    };

    let output = use_case.execute(&auth.user_id, input).await?;

    Ok(Json(UserResponse::from(output)))
}
