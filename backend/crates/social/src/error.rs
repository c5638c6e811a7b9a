//! Social Error Types
//!
//! Social-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Social-specific result type alias
pub type SocialResult<T> = Result<T, SocialError>;

/// Social-specific error variants
#[derive(Debug, Error)]
pub enum SocialError {
    /// A user cannot follow themselves
    #[error("Cannot follow yourself")]
    SelfFollow,

    /// Profile endpoint does not exist
    #[error("User not found")]
    UserNotFound,

    /// Article endpoint does not exist
    #[error("Article not found")]
    ArticleNotFound,

    /// Comment does not exist (or belongs to another article)
    #[error("Comment not found")]
    CommentNotFound,

    /// Slug derived from the title is already taken
    #[error("An article with this title already exists")]
    SlugTaken,

    /// Article mutation attempted by a non-author
    #[error("Only the author may modify this article")]
    NotArticleAuthor,

    /// Comment deletion attempted by a non-author
    #[error("Only the author may delete this comment")]
    NotCommentAuthor,

    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SocialError {
    /// Convert to the unified boundary error.
    pub fn to_app_error(self) -> AppError {
        match self {
            SocialError::SelfFollow => AppError::unprocessable("Cannot follow yourself"),
            SocialError::UserNotFound => AppError::not_found("User not found"),
            SocialError::ArticleNotFound => AppError::not_found("Article not found"),
            SocialError::CommentNotFound => AppError::not_found("Comment not found"),
            SocialError::SlugTaken => {
                AppError::conflict("An article with this title already exists")
            }
            SocialError::NotArticleAuthor => {
                AppError::forbidden("Only the author may modify this article")
            }
            SocialError::NotCommentAuthor => {
                AppError::forbidden("Only the author may delete this comment")
            }
            SocialError::Validation(msg) => AppError::unprocessable(msg),
            SocialError::Database(e) => AppError::from(e),
            SocialError::Internal(_) => AppError::internal("Internal server error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SocialError::Database(e) => {
                tracing::error!(error = %e, "Social database error");
            }
            SocialError::Internal(msg) => {
                tracing::error!(message = %msg, "Social internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Social error");
            }
        }
    }
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_follow_is_unprocessable() {
        assert_eq!(SocialError::SelfFollow.to_app_error().status_code(), 422);
    }

    #[test]
    fn missing_endpoints_are_not_found() {
        assert_eq!(SocialError::UserNotFound.to_app_error().status_code(), 404);
        assert_eq!(
            SocialError::ArticleNotFound.to_app_error().status_code(),
            404
        );
        assert_eq!(
            SocialError::CommentNotFound.to_app_error().status_code(),
            404
        );
    }

    #[test]
    fn author_only_rules_are_forbidden() {
        assert_eq!(
            SocialError::NotArticleAuthor.to_app_error().status_code(),
            403
        );
        assert_eq!(
            SocialError::NotCommentAuthor.to_app_error().status_code(),
            403
        );
    }

    #[test]
    fn duplicate_slug_is_a_conflict() {
        assert_eq!(SocialError::SlugTaken.to_app_error().status_code(), 409);
    }

    #[test]
    fn internal_error_body_stays_generic() {
        let app = SocialError::Internal("pool exploded".to_string()).to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("pool exploded"));
    }
}
