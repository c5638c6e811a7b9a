//! Login Use Case
//!
//! Authenticates a user by email + password and issues a token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::application::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Every failure on this path collapses into `InvalidCredentials`:
    /// an unparseable email, an unknown email and a wrong password must
    /// be indistinguishable to the client.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthenticatedUser> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A password violating the policy can never have been registered
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id.into_uuid())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthenticatedUser { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryUserRepository;
    use crate::application::{RegisterInput, RegisterUseCase};

    fn deps() -> (Arc<InMemoryUserRepository>, Arc<TokenService>) {
        (
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(TokenService::new(b"login-test-secret")),
        )
    }

    async fn register_jake(repo: &Arc<InMemoryUserRepository>, tokens: &Arc<TokenService>) {
        RegisterUseCase::new(repo.clone(), tokens.clone())
            .execute(RegisterInput {
                username: "jake".to_string(),
                email: "jake@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn registered_user_can_log_in() {
        let (repo, tokens) = deps();
        register_jake(&repo, &tokens).await;

        let output = LoginUseCase::new(repo, tokens.clone())
            .execute(LoginInput {
                email: "jake@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap();

        // The issued token resolves back to the stored account
        let subject = tokens.validate(&output.token).unwrap();
        assert_eq!(subject, output.user.user_id.into_uuid());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (repo, tokens) = deps();
        register_jake(&repo, &tokens).await;

        let err = LoginUseCase::new(repo, tokens)
            .execute(LoginInput {
                email: "jake@example.com".to_string(),
                password: "not the password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_is_indistinguishable_from_wrong_password() {
        let (repo, tokens) = deps();
        register_jake(&repo, &tokens).await;

        let err = LoginUseCase::new(repo, tokens)
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn malformed_email_is_invalid_credentials() {
        let (repo, tokens) = deps();

        let err = LoginUseCase::new(repo, tokens)
            .execute(LoginInput {
                email: "not-an-email".to_string(),
                password: "whatever password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
