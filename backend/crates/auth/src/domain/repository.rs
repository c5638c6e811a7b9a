//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by login email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by handle
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Check if an email is taken
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Check if a username is taken
    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}
