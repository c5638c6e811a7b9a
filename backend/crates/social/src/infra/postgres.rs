//! PostgreSQL Repository Implementations
//!
//! Relation writes are single atomic statements: `INSERT .. ON CONFLICT
//! DO NOTHING` for add, plain `DELETE` for remove. Two concurrent adds
//! for the same pair converge to one stored row without locking.

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, CommentId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::article::Article;
use crate::domain::entity::comment::Comment;
use crate::domain::entity::profile::Profile;
use crate::domain::repository::{
    ArticleRepository, CommentRepository, FavoriteRepository, FollowRepository,
    ProfileRepository, TagRepository,
};
use crate::domain::value_object::slug::ArticleSlug;
use crate::error::SocialResult;

const ARTICLE_SELECT: &str = r#"
    SELECT
        a.article_id,
        a.slug,
        a.title,
        a.description,
        a.body,
        a.author_id,
        COALESCE(
            array_agg(t.name ORDER BY t.name) FILTER (WHERE t.name IS NOT NULL),
            '{}'
        ) AS tag_list,
        a.created_at,
        a.updated_at
    FROM articles a
    LEFT JOIN article_tags lt ON lt.article_id = a.article_id
    LEFT JOIN tags t ON t.tag_id = lt.tag_id
"#;

/// PostgreSQL-backed social repository
#[derive(Clone)]
pub struct PgSocialRepository {
    pool: PgPool,
}

impl PgSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Profiles
// ============================================================================

impl ProfileRepository for PgSocialRepository {
    async fn find_profile_by_username(&self, username: &str) -> SocialResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT user_id, username, bio, image FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_profile()))
    }

    async fn find_profile_by_id(&self, user_id: &UserId) -> SocialResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT user_id, username, bio, image FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_profile()))
    }
}

// ============================================================================
// Articles
// ============================================================================

impl ArticleRepository for PgSocialRepository {
    async fn create_article(&self, article: &Article) -> SocialResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO articles (
                article_id,
                slug,
                title,
                description,
                body,
                author_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(article.slug.as_str())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.author_id.as_uuid())
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&mut *tx)
        .await?;

        for name in &article.tag_list {
            let tag_id = sqlx::query_scalar::<_, Uuid>(
                r#"
                INSERT INTO tags (tag_id, name)
                VALUES ($1, $2)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING tag_id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                INSERT INTO article_tags (article_id, tag_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(article.article_id.as_uuid())
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_article_by_slug(&self, slug: &str) -> SocialResult<Option<Article>> {
        let query = format!("{ARTICLE_SELECT} WHERE a.slug = $1 GROUP BY a.article_id");

        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_article()))
    }

    async fn list_articles(&self) -> SocialResult<Vec<Article>> {
        let query =
            format!("{ARTICLE_SELECT} GROUP BY a.article_id ORDER BY a.created_at DESC");

        let rows = sqlx::query_as::<_, ArticleRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_article()).collect())
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> SocialResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1)",
        )
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_article(&self, article: &Article) -> SocialResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET
                slug = $2,
                title = $3,
                description = $4,
                body = $5,
                updated_at = $6
            WHERE article_id = $1
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(article.slug.as_str())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_article(&self, article_id: &ArticleId) -> SocialResult<()> {
        sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(article_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Comments
// ============================================================================

impl CommentRepository for PgSocialRepository {
    async fn create_comment(&self, comment: &Comment) -> SocialResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                article_id,
                author_id,
                body,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.article_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.body)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_comment_by_id(&self, comment_id: &CommentId) -> SocialResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, article_id, author_id, body, created_at, updated_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_comment()))
    }

    async fn list_comments_for_article(
        &self,
        article_id: &ArticleId,
    ) -> SocialResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, article_id, author_id, body, created_at, updated_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(article_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> SocialResult<()> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Tags
// ============================================================================

impl TagRepository for PgSocialRepository {
    async fn list_tags(&self) -> SocialResult<Vec<String>> {
        let tags = sqlx::query_scalar::<_, String>("SELECT name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(tags)
    }
}

// ============================================================================
// Follow relation
// ============================================================================

impl FollowRepository for PgSocialRepository {
    async fn follow_exists(&self, follower: &UserId, followed: &UserId) -> SocialResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM followers
                WHERE user_id = $1 AND follower_id = $2
            )
            "#,
        )
        .bind(followed.as_uuid())
        .bind(follower.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn add_follow(&self, follower: &UserId, followed: &UserId) -> SocialResult<()> {
        sqlx::query(
            r#"
            INSERT INTO followers (user_id, follower_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(followed.as_uuid())
        .bind(follower.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_follow(&self, follower: &UserId, followed: &UserId) -> SocialResult<()> {
        sqlx::query("DELETE FROM followers WHERE user_id = $1 AND follower_id = $2")
            .bind(followed.as_uuid())
            .bind(follower.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_followers(&self, followed: &UserId) -> SocialResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM followers WHERE user_id = $1")
                .bind(followed.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// ============================================================================
// Favorite relation
// ============================================================================

impl FavoriteRepository for PgSocialRepository {
    async fn favorite_exists(&self, user: &UserId, article: &ArticleId) -> SocialResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM favorites
                WHERE article_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(article.as_uuid())
        .bind(user.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn add_favorite(&self, user: &UserId, article: &ArticleId) -> SocialResult<()> {
        sqlx::query(
            r#"
            INSERT INTO favorites (article_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(article.as_uuid())
        .bind(user.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_favorite(&self, user: &UserId, article: &ArticleId) -> SocialResult<()> {
        sqlx::query("DELETE FROM favorites WHERE article_id = $1 AND user_id = $2")
            .bind(article.as_uuid())
            .bind(user.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_favorites(&self, article: &ArticleId) -> SocialResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE article_id = $1")
                .bind(article.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    username: String,
    bio: String,
    image: Option<String>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            user_id: UserId::from_uuid(self.user_id),
            username: self.username,
            bio: self.bio,
            image: self.image,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    article_id: Uuid,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: Uuid,
    tag_list: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self) -> Article {
        Article {
            article_id: ArticleId::from_uuid(self.article_id),
            slug: ArticleSlug::from_db(self.slug),
            title: self.title,
            description: self.description,
            body: self.body,
            author_id: UserId::from_uuid(self.author_id),
            tag_list: self.tag_list,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    article_id: Uuid,
    author_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            article_id: ArticleId::from_uuid(self.article_id),
            author_id: UserId::from_uuid(self.author_id),
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
