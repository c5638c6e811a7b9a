//! Auth Middleware
//!
//! Bearer token validation for protected routes. The accepted header
//! shape is exactly `Authorization: Bearer <token>`.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use kernel::id::UserId;
use platform::bearer::extract_bearer;
use platform::token::TokenService;

use crate::error::AuthError;

/// Authenticated identity stored in request extensions by [`require_auth`]
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Identity stored in request extensions by [`optional_auth`].
///
/// Always inserted, so downstream handlers can extract it
/// unconditionally and match on the inner `Option`.
#[derive(Debug, Clone, Copy)]
pub struct MaybeUser(pub Option<UserId>);

/// Middleware that rejects the request unless it carries a valid token.
///
/// On success the verified [`AuthUser`] is inserted into request
/// extensions for downstream handlers.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers())?;
    let user_id = tokens.validate(token)?;

    req.extensions_mut().insert(AuthUser {
        user_id: UserId::from_uuid(user_id),
    });

    Ok(next.run(req).await)
}

/// Middleware that resolves the caller's identity without requiring one.
///
/// A missing header and an invalid token are both treated as anonymous;
/// optional routes never reject on auth grounds.
pub async fn optional_auth(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let user_id = extract_bearer(req.headers())
        .ok()
        .and_then(|token| tokens.validate(token).ok())
        .map(UserId::from_uuid);

    req.extensions_mut().insert(MaybeUser(user_id));

    next.run(req).await
}
