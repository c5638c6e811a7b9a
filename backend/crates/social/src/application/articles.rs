//! Article Use Cases
//!
//! Create, read, update and delete articles. Mutations are author-only.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::article::Article;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::slug::ArticleSlug;
use crate::error::{SocialError, SocialResult};

/// Create input
pub struct CreateArticleInput {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

/// Update input. Absent fields leave the article untouched.
#[derive(Default)]
pub struct UpdateArticleInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

/// Article use cases
pub struct ArticlesUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> ArticlesUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        author: &UserId,
        input: CreateArticleInput,
    ) -> SocialResult<Article> {
        let tag_list = normalize_tags(input.tag_list);

        let article = Article::new(
            *author,
            input.title,
            input.description,
            input.body,
            tag_list,
        )
        .map_err(|e| SocialError::Validation(e.message().to_string()))?;

        // Pre-check; the unique constraint remains the backstop against
        // a concurrent duplicate insert.
        if self.repo.slug_exists(&article.slug).await? {
            return Err(SocialError::SlugTaken);
        }

        self.repo.create_article(&article).await?;

        tracing::info!(slug = %article.slug, author = %author, "Article created");

        Ok(article)
    }

    pub async fn get(&self, slug: &str) -> SocialResult<Article> {
        self.repo
            .find_article_by_slug(slug)
            .await?
            .ok_or(SocialError::ArticleNotFound)
    }

    pub async fn list(&self) -> SocialResult<Vec<Article>> {
        self.repo.list_articles().await
    }

    pub async fn update(
        &self,
        author: &UserId,
        slug: &str,
        input: UpdateArticleInput,
    ) -> SocialResult<Article> {
        let mut article = self.get(slug).await?;

        if !article.is_authored_by(author) {
            return Err(SocialError::NotArticleAuthor);
        }

        if let Some(title) = input.title {
            let old_slug = article.slug.clone();
            article
                .set_title(title)
                .map_err(|e| SocialError::Validation(e.message().to_string()))?;

            if article.slug != old_slug && self.repo.slug_exists(&article.slug).await? {
                return Err(SocialError::SlugTaken);
            }
        }

        if let Some(description) = input.description {
            article.set_description(description);
        }

        if let Some(body) = input.body {
            article.set_body(body);
        }

        self.repo.update_article(&article).await?;

        tracing::info!(slug = %article.slug, author = %author, "Article updated");

        Ok(article)
    }

    pub async fn delete(&self, author: &UserId, slug: &str) -> SocialResult<()> {
        let article = self.get(slug).await?;

        if !article.is_authored_by(author) {
            return Err(SocialError::NotArticleAuthor);
        }

        self.repo.delete_article(&article.article_id).await?;

        tracing::info!(slug = %article.slug, author = %author, "Article deleted");

        Ok(())
    }
}

/// Trim, drop empties, dedup and sort tag names
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
