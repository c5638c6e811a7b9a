//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::article::Article;
pub use entity::comment::Comment;
pub use entity::profile::Profile;
pub use repository::{
    ArticleRepository, CommentRepository, FavoriteRepository, FollowRepository,
    ProfileRepository, TagRepository,
};
