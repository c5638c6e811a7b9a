//! Current User Use Case
//!
//! Loads the authenticated user and issues a fresh token for it.

use std::sync::Arc;

use kernel::id::UserId;
use platform::token::TokenService;

use crate::application::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<AuthenticatedUser> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let token = self.tokens.issue(user.user_id.into_uuid())?;

        Ok(AuthenticatedUser { user, token })
    }
}
