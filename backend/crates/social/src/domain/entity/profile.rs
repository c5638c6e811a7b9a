//! Profile Entity
//!
//! Public read model of a user account: the fields anyone may see.
//! Accounts are owned by the auth side; this crate only ever reads them.

use kernel::id::UserId;

/// Public profile
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: UserId,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}
