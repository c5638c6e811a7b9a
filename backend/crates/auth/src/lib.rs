//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - User registration and login with email + password
//! - Stateless bearer tokens (HS256 JWT, 15-minute lifetime)
//! - Current-user read and profile update
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never persisted or logged in clear
//! - Unknown email and wrong password are indistinguishable to the client
//! - Token failures map to one generic unauthorized response;
//!   the exact reason is only visible in server logs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthUser, MaybeUser, optional_auth, require_auth};
pub use presentation::router::user_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
