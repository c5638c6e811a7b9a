//! User Entity
//!
//! The account aggregate: identity, unique handles, credentials hash
//! and profile fields.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// User entity
///
/// The password is only ever held as an Argon2id PHC hash.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique handle (profile URLs, author fields)
    pub username: UserName,
    /// Unique login email
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: HashedPassword,
    /// Free-form biography
    pub bio: String,
    /// Avatar image URL
    pub image: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: UserName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            bio: String::new(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the login email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Update the handle
    pub fn set_username(&mut self, username: UserName) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the biography
    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }

    /// Update the avatar image URL
    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
        self.updated_at = Utc::now();
    }

    /// Replace the stored credential hash
    pub fn set_password_hash(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
