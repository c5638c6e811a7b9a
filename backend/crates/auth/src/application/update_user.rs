//! Update User Use Case
//!
//! Partial update of the authenticated user's account fields.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::application::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Update input. Every field is optional, absent fields are untouched.
#[derive(Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpdateUserInput,
    ) -> AuthResult<AuthenticatedUser> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(raw) = input.email {
            let email = Email::new(raw)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            if email != user.email && self.repo.exists_by_email(&email).await? {
                return Err(AuthError::EmailTaken);
            }
            user.set_email(email);
        }

        if let Some(raw) = input.username {
            let username = UserName::new(raw)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            if username != user.username && self.repo.exists_by_username(&username).await? {
                return Err(AuthError::UsernameTaken);
            }
            user.set_username(username);
        }

        if let Some(raw) = input.password {
            let password = ClearTextPassword::new(raw)
                .map_err(|e| AuthError::Validation(e.to_string()))?;
            let hash = password
                .hash()
                .map_err(|e| AuthError::Internal(e.to_string()))?;
            user.set_password_hash(hash);
        }

        if let Some(bio) = input.bio {
            user.set_bio(bio);
        }

        if let Some(image) = input.image {
            user.set_image(Some(image));
        }

        self.repo.update(&user).await?;

        let token = self.tokens.issue(user.user_id.into_uuid())?;

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(AuthenticatedUser { user, token })
    }
}
