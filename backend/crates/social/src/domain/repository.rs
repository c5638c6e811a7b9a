//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! The relation repositories (follow, favorite) are the only writers of
//! their join tables; both `add` and `remove` are idempotent.

use kernel::id::{ArticleId, CommentId, UserId};

use crate::domain::entity::article::Article;
use crate::domain::entity::comment::Comment;
use crate::domain::entity::profile::Profile;
use crate::domain::value_object::slug::ArticleSlug;
use crate::error::SocialResult;

/// Read access to public profiles
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Find a profile by handle
    async fn find_profile_by_username(&self, username: &str) -> SocialResult<Option<Profile>>;

    /// Find a profile by account id
    async fn find_profile_by_id(&self, user_id: &UserId) -> SocialResult<Option<Profile>>;
}

/// Article persistence
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Persist a new article together with its tag links
    async fn create_article(&self, article: &Article) -> SocialResult<()>;

    /// Find an article by slug
    async fn find_article_by_slug(&self, slug: &str) -> SocialResult<Option<Article>>;

    /// All articles, newest first
    async fn list_articles(&self) -> SocialResult<Vec<Article>>;

    /// Check if a slug is taken
    async fn slug_exists(&self, slug: &ArticleSlug) -> SocialResult<bool>;

    /// Update content fields and slug (tag links are not touched)
    async fn update_article(&self, article: &Article) -> SocialResult<()>;

    /// Delete an article; comments, favorites and tag links cascade
    async fn delete_article(&self, article_id: &ArticleId) -> SocialResult<()>;
}

/// Comment persistence
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    async fn create_comment(&self, comment: &Comment) -> SocialResult<()>;

    async fn find_comment_by_id(&self, comment_id: &CommentId) -> SocialResult<Option<Comment>>;

    /// Comments for an article, oldest first
    async fn list_comments_for_article(
        &self,
        article_id: &ArticleId,
    ) -> SocialResult<Vec<Comment>>;

    async fn delete_comment(&self, comment_id: &CommentId) -> SocialResult<()>;
}

/// Tag reads (tags are written as a side effect of article creation)
#[trait_variant::make(TagRepository: Send)]
pub trait LocalTagRepository {
    /// All tag names, alphabetical
    async fn list_tags(&self) -> SocialResult<Vec<String>>;
}

/// Follow relation store. The row's existence is the sole state.
#[trait_variant::make(FollowRepository: Send)]
pub trait LocalFollowRepository {
    /// Whether `follower` follows `followed`
    async fn follow_exists(&self, follower: &UserId, followed: &UserId) -> SocialResult<bool>;

    /// Record the relation; adding an existing pair is a no-op
    async fn add_follow(&self, follower: &UserId, followed: &UserId) -> SocialResult<()>;

    /// Remove the relation; removing an absent pair is a no-op
    async fn remove_follow(&self, follower: &UserId, followed: &UserId) -> SocialResult<()>;

    /// Number of followers of `followed`
    async fn count_followers(&self, followed: &UserId) -> SocialResult<i64>;
}

/// Favorite relation store. Same contract as the follow store.
#[trait_variant::make(FavoriteRepository: Send)]
pub trait LocalFavoriteRepository {
    /// Whether `user` has favorited `article`
    async fn favorite_exists(&self, user: &UserId, article: &ArticleId) -> SocialResult<bool>;

    /// Record the relation; adding an existing pair is a no-op
    async fn add_favorite(&self, user: &UserId, article: &ArticleId) -> SocialResult<()>;

    /// Remove the relation; removing an absent pair is a no-op
    async fn remove_favorite(&self, user: &UserId, article: &ArticleId) -> SocialResult<()>;

    /// Number of users who favorited `article`
    async fn count_favorites(&self, article: &ArticleId) -> SocialResult<i64>;
}
