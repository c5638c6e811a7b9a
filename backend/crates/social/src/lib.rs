//! Social (Articles & Relationships) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, presenters, router
//!
//! ## Features
//! - Articles with slugs, tags and author-only mutation
//! - Comments on articles
//! - Follow and favorite relations (idempotent add/remove)
//! - Viewer-dependent read models (`following`, `favorited`,
//!   `favoritesCount` recomputed from the store on every render)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{SocialError, SocialResult};
pub use infra::postgres::PgSocialRepository;
pub use presentation::router::social_router;
