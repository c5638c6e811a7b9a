//! Register Use Case
//!
//! Creates a new user account and issues its first token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::application::AuthenticatedUser;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthenticatedUser> {
        let username = UserName::new(input.username)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Uniqueness pre-checks; the unique constraints remain the backstop
        // against a concurrent duplicate insert.
        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(username, email, password_hash);

        self.repo.create(&user).await?;

        let token = self.tokens.issue(user.user_id.into_uuid())?;

        tracing::info!(user_id = %user.user_id, username = %user.username, "User registered");

        Ok(AuthenticatedUser { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryUserRepository;

    fn use_case() -> RegisterUseCase<InMemoryUserRepository> {
        RegisterUseCase::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(TokenService::new(b"register-test-secret")),
        )
    }

    fn input(username: &str, email: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            email: email.to_string(),
            password: "correct horse battery".to_string(),
        }
    }

    #[tokio::test]
    async fn new_account_gets_empty_profile_and_a_token() {
        let use_case = use_case();

        let output = use_case
            .execute(input("jake", "jake@example.com"))
            .await
            .unwrap();

        assert_eq!(output.user.username.as_str(), "jake");
        assert_eq!(output.user.email.as_str(), "jake@example.com");
        assert!(output.user.bio.is_empty());
        assert!(output.user.image.is_none());
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let use_case = use_case();
        use_case
            .execute(input("jake", "jake@example.com"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("jacob", "jake@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let use_case = use_case();
        use_case
            .execute(input("jake", "jake@example.com"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("jake", "other@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UsernameTaken));
    }

    #[tokio::test]
    async fn weak_password_fails_validation() {
        let err = use_case()
            .execute(RegisterInput {
                username: "jake".to_string(),
                email: "jake@example.com".to_string(),
                password: "short".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
    }
}
