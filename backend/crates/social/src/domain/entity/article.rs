//! Article Entity
//!
//! An authored post: slug, content fields, tag names and timestamps.

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use kernel::id::{ArticleId, UserId};

use crate::domain::value_object::slug::ArticleSlug;

/// Article entity
#[derive(Debug, Clone)]
pub struct Article {
    pub article_id: ArticleId,
    /// URL identifier, derived from the title
    pub slug: ArticleSlug,
    pub title: String,
    pub description: String,
    pub body: String,
    /// Author account
    pub author_id: UserId,
    /// Tag names, sorted, no duplicates
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article. The slug is derived from the title.
    pub fn new(
        author_id: UserId,
        title: String,
        description: String,
        body: String,
        tag_list: Vec<String>,
    ) -> AppResult<Self> {
        let slug = ArticleSlug::from_title(&title)?;
        let now = Utc::now();

        Ok(Self {
            article_id: ArticleId::new(),
            slug,
            title,
            description,
            body,
            author_id,
            tag_list,
            created_at: now,
            updated_at: now,
        })
    }

    /// Change the title, re-deriving the slug
    pub fn set_title(&mut self, title: String) -> AppResult<()> {
        self.slug = ArticleSlug::from_title(&title)?;
        self.title = title;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
        self.updated_at = Utc::now();
    }

    /// Whether the given user wrote this article
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            UserId::new(),
            "How to train your dragon".to_string(),
            "Ever wonder how?".to_string(),
            "Very carefully.".to_string(),
            vec!["dragons".to_string(), "training".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_slug_follows_title() {
        let mut article = article();
        assert_eq!(article.slug.as_str(), "how-to-train-your-dragon");

        article.set_title("Did you train your dragon?".to_string()).unwrap();
        assert_eq!(article.slug.as_str(), "did-you-train-your-dragon");
    }

    #[test]
    fn test_authorship() {
        let article = article();
        assert!(article.is_authored_by(&article.author_id));
        assert!(!article.is_authored_by(&UserId::new()));
    }
}
