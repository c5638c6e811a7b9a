//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, CommentId, UserId};

/// Comment on an article
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(article_id: ArticleId, author_id: UserId, body: String) -> Self {
        let now = Utc::now();

        Self {
            comment_id: CommentId::new(),
            article_id,
            author_id,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user wrote this comment
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }
}
