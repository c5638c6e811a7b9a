//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Token failures are deliberately collapsed into one client-facing
//! message: the variant (malformed, expired, bad signature, wrong
//! algorithm) is logged server-side but never leaks to the response.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::bearer::BearerError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password or unknown email. One variant on purpose, since
    /// distinguishing the two would allow user enumeration.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User not found (by id, for authenticated lookups)
    #[error("User not found")]
    UserNotFound,

    /// Email already registered
    #[error("Email already taken")]
    EmailTaken,

    /// Username already registered
    #[error("Username already taken")]
    UsernameTaken,

    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Missing or malformed `Authorization` header
    #[error("Authorization header rejected: {0}")]
    Bearer(#[from] BearerError),

    /// Token failed validation
    #[error("Token rejected: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Convert to the unified boundary error.
    ///
    /// Authentication failures all share a generic body.
    pub fn to_app_error(self) -> AppError {
        match self {
            AuthError::InvalidCredentials => AppError::unauthorized("Invalid email or password"),
            AuthError::Bearer(_) | AuthError::Token(_) => {
                AppError::unauthorized("Not authorized")
            }
            AuthError::UserNotFound => AppError::not_found("User not found"),
            AuthError::EmailTaken => AppError::conflict("Email already taken"),
            AuthError::UsernameTaken => AppError::conflict("Username already taken"),
            AuthError::Validation(msg) => AppError::unprocessable(msg),
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Token(e) => {
                // Each token failure kind is logged distinctly
                tracing::warn!(reason = %e, "Bearer token rejected");
            }
            AuthError::Bearer(e) => {
                tracing::debug!(reason = %e, "Authorization header rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_errors_share_one_client_message() {
        for err in [
            AuthError::Token(TokenError::Malformed),
            AuthError::Token(TokenError::Expired),
            AuthError::Token(TokenError::BadSignature),
            AuthError::Token(TokenError::WrongAlgorithm),
            AuthError::Bearer(BearerError::Missing),
            AuthError::Bearer(BearerError::Malformed),
        ] {
            let app = err.to_app_error();
            assert_eq!(app.status_code(), 401);
            assert_eq!(app.message(), "Not authorized");
        }
    }

    #[test]
    fn invalid_credentials_is_unauthorized() {
        let app = AuthError::InvalidCredentials.to_app_error();
        assert_eq!(app.status_code(), 401);
    }

    #[test]
    fn duplicate_identities_are_conflicts() {
        assert_eq!(AuthError::EmailTaken.to_app_error().status_code(), 409);
        assert_eq!(AuthError::UsernameTaken.to_app_error().status_code(), 409);
    }

    #[test]
    fn internal_error_body_stays_generic() {
        let app = AuthError::Internal("secret detail".to_string()).to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("secret detail"));
    }
}
