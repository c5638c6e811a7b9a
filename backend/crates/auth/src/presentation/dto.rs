//! API DTOs (Data Transfer Objects)
//!
//! Account payloads are wrapped in a `user` envelope on both requests
//! and responses.

use serde::{Deserialize, Serialize};

use crate::application::AuthenticatedUser;

// ============================================================================
// Registration
// ============================================================================

/// Registration request body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub user: RegisterRequestUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequestUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub user: LoginRequestUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequestUser {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Update
// ============================================================================

/// Update request body. Absent fields leave the account untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub user: UpdateUserRequestUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequestUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

// ============================================================================
// User response
// ============================================================================

/// User response envelope
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: UserBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserBody {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(authenticated: AuthenticatedUser) -> Self {
        let AuthenticatedUser { user, token } = authenticated;
        Self {
            user: UserBody {
                email: user.email.into_string(),
                token,
                username: user.username.into_string(),
                bio: user.bio,
                image: user.image,
            },
        }
    }
}
