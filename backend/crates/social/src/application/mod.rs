//! Application Layer
//!
//! Use cases and application services.

pub mod articles;
pub mod comments;
pub mod favorites;
pub mod follow;
pub mod profiles;
pub mod tags;

// Re-exports
pub use articles::{ArticlesUseCase, CreateArticleInput, UpdateArticleInput};
pub use comments::CommentsUseCase;
pub use favorites::FavoritesUseCase;
pub use follow::FollowUseCase;
pub use profiles::ProfilesUseCase;
pub use tags::TagsUseCase;
