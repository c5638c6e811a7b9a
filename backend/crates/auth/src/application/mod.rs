//! Application Layer
//!
//! Use cases and application services.

pub mod current_user;
pub mod login;
pub mod register;
pub mod update_user;

// Re-exports
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};

/// A user together with a token issued for it, which is what every
/// account endpoint ultimately returns.
#[derive(Debug)]
pub struct AuthenticatedUser {
    pub user: crate::domain::entity::user::User,
    pub token: String,
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use kernel::id::UserId;

    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use crate::error::AuthResult;

    /// In-memory repository for use-case tests
    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, user: &User) -> AuthResult<()> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.user_id == *user_id).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.email == *email).cloned())
        }

        async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.username == *username).cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| u.email == *email))
        }

        async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| u.username == *username))
        }

        async fn update(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            if let Some(stored) = users.iter_mut().find(|u| u.user_id == user.user_id) {
                *stored = user.clone();
            }
            Ok(())
        }
    }
}
