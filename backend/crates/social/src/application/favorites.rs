//! Favorite Use Case
//!
//! Favorite and unfavorite articles by slug. Idempotent in both
//! directions, same contract as the follow relation.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::article::Article;
use crate::domain::repository::{ArticleRepository, FavoriteRepository};
use crate::error::{SocialError, SocialResult};

/// Favorite relation use case
pub struct FavoritesUseCase<R>
where
    R: ArticleRepository + FavoriteRepository,
{
    repo: Arc<R>,
}

impl<R> FavoritesUseCase<R>
where
    R: ArticleRepository + FavoriteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Favorite the article behind `slug`. Returns the article.
    pub async fn favorite(&self, user: &UserId, slug: &str) -> SocialResult<Article> {
        let article = self.resolve(slug).await?;

        self.repo.add_favorite(user, &article.article_id).await?;

        tracing::info!(user = %user, article = %article.slug, "Favorite added");

        Ok(article)
    }

    /// Unfavorite. A no-op when the relation does not exist.
    pub async fn unfavorite(&self, user: &UserId, slug: &str) -> SocialResult<Article> {
        let article = self.resolve(slug).await?;

        self.repo.remove_favorite(user, &article.article_id).await?;

        tracing::info!(user = %user, article = %article.slug, "Favorite removed");

        Ok(article)
    }

    async fn resolve(&self, slug: &str) -> SocialResult<Article> {
        self.repo
            .find_article_by_slug(slug)
            .await?
            .ok_or(SocialError::ArticleNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemorySocialRepository;
    use crate::application::{ArticlesUseCase, CreateArticleInput};
    use kernel::id::ArticleId;

    async fn setup() -> (Arc<InMemorySocialRepository>, UserId, ArticleId) {
        let repo = Arc::new(InMemorySocialRepository::default());
        let author = repo.seed_profile("jake");

        let article = ArticlesUseCase::new(repo.clone())
            .create(
                &author,
                CreateArticleInput {
                    title: "How to train your dragon".to_string(),
                    description: "Ever wonder how?".to_string(),
                    body: "Very carefully.".to_string(),
                    tag_list: vec![],
                },
            )
            .await
            .unwrap();

        (repo, author, article.article_id)
    }

    #[tokio::test]
    async fn favorite_records_the_relation() {
        let (repo, _, article_id) = setup().await;
        let reader = repo.seed_profile("jane");
        let use_case = FavoritesUseCase::new(repo.clone());

        use_case
            .favorite(&reader, "how-to-train-your-dragon")
            .await
            .unwrap();

        assert!(repo.favorite_exists(&reader, &article_id).await.unwrap());
        assert_eq!(repo.count_favorites(&article_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn favoriting_twice_converges_to_one_relation() {
        let (repo, _, article_id) = setup().await;
        let reader = repo.seed_profile("jane");
        let use_case = FavoritesUseCase::new(repo.clone());

        use_case
            .favorite(&reader, "how-to-train-your-dragon")
            .await
            .unwrap();
        use_case
            .favorite(&reader, "how-to-train-your-dragon")
            .await
            .unwrap();

        assert_eq!(repo.count_favorites(&article_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unfavoriting_an_absent_relation_succeeds() {
        let (repo, _, article_id) = setup().await;
        let reader = repo.seed_profile("jane");
        let use_case = FavoritesUseCase::new(repo.clone());

        let result = use_case
            .unfavorite(&reader, "how-to-train-your-dragon")
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.count_favorites(&article_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn distinct_users_each_count_once() {
        let (repo, _, article_id) = setup().await;
        let jane = repo.seed_profile("jane");
        let john = repo.seed_profile("john");
        let use_case = FavoritesUseCase::new(repo.clone());

        use_case
            .favorite(&jane, "how-to-train-your-dragon")
            .await
            .unwrap();
        use_case
            .favorite(&john, "how-to-train-your-dragon")
            .await
            .unwrap();

        assert_eq!(repo.count_favorites(&article_id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let (repo, author, _) = setup().await;
        let use_case = FavoritesUseCase::new(repo);

        let err = use_case.favorite(&author, "missing").await.unwrap_err();
        assert!(matches!(err, SocialError::ArticleNotFound));
    }
}
