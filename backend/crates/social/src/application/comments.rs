//! Comment Use Cases

use std::sync::Arc;

use kernel::id::{CommentId, UserId};

use crate::domain::entity::comment::Comment;
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::error::{SocialError, SocialResult};

/// Comment use cases
pub struct CommentsUseCase<R>
where
    R: ArticleRepository + CommentRepository,
{
    repo: Arc<R>,
}

impl<R> CommentsUseCase<R>
where
    R: ArticleRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn add(&self, author: &UserId, slug: &str, body: String) -> SocialResult<Comment> {
        if body.trim().is_empty() {
            return Err(SocialError::Validation(
                "Comment body cannot be empty".to_string(),
            ));
        }

        let article = self
            .repo
            .find_article_by_slug(slug)
            .await?
            .ok_or(SocialError::ArticleNotFound)?;

        let comment = Comment::new(article.article_id, *author, body);

        self.repo.create_comment(&comment).await?;

        tracing::info!(article = %article.slug, author = %author, "Comment added");

        Ok(comment)
    }

    /// Comments for an article, oldest first
    pub async fn list(&self, slug: &str) -> SocialResult<Vec<Comment>> {
        let article = self
            .repo
            .find_article_by_slug(slug)
            .await?
            .ok_or(SocialError::ArticleNotFound)?;

        self.repo.list_comments_for_article(&article.article_id).await
    }

    /// Delete a comment. Author-only; the comment must belong to the
    /// article behind `slug`.
    pub async fn delete(
        &self,
        author: &UserId,
        slug: &str,
        comment_id: &CommentId,
    ) -> SocialResult<()> {
        let article = self
            .repo
            .find_article_by_slug(slug)
            .await?
            .ok_or(SocialError::ArticleNotFound)?;

        let comment = self
            .repo
            .find_comment_by_id(comment_id)
            .await?
            .filter(|c| c.article_id == article.article_id)
            .ok_or(SocialError::CommentNotFound)?;

        if !comment.is_authored_by(author) {
            return Err(SocialError::NotCommentAuthor);
        }

        self.repo.delete_comment(comment_id).await?;

        tracing::info!(article = %article.slug, author = %author, "Comment deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemorySocialRepository;
    use crate::application::{ArticlesUseCase, CreateArticleInput};

    async fn setup() -> (Arc<InMemorySocialRepository>, UserId) {
        let repo = Arc::new(InMemorySocialRepository::default());
        let author = repo.seed_profile("jake");

        ArticlesUseCase::new(repo.clone())
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

        (repo, author)
    }

    #[tokio::test]
    async fn added_comments_are_listed_in_order() {
        let (repo, author) = setup().await;
        let use_case = CommentsUseCase::new(repo);

        use_case
            .add(&author, "how-to-train-your-dragon", "First!".to_string())
            .await
            .unwrap();
        use_case
            .add(&author, "how-to-train-your-dragon", "Second!".to_string())
            .await
            .unwrap();

        let comments = use_case.list("how-to-train-your-dragon").await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].body, "First!");
        assert_eq!(comments[1].body, "Second!");
    }

    #[tokio::test]
    async fn empty_body_fails_validation() {
        let (repo, author) = setup().await;
        let use_case = CommentsUseCase::new(repo);

        let err = use_case
            .add(&author, "how-to-train-your-dragon", "   ".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, SocialError::Validation(_)));
    }

    #[tokio::test]
    async fn only_the_author_may_delete() {
        let (repo, author) = setup().await;
        let stranger = repo.seed_profile("jane");
        let use_case = CommentsUseCase::new(repo);

        let comment = use_case
            .add(&author, "how-to-train-your-dragon", "Mine".to_string())
            .await
            .unwrap();

        let err = use_case
            .delete(&stranger, "how-to-train-your-dragon", &comment.comment_id)
            .await
            .unwrap_err();
        assert!(matches!(err, SocialError::NotCommentAuthor));

        use_case
            .delete(&author, "how-to-train-your-dragon", &comment.comment_id)
            .await
            .unwrap();
        assert!(use_case
            .list("how-to-train-your-dragon")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn comment_under_another_article_is_not_found() {
        let (repo, author) = setup().await;

        ArticlesUseCase::new(repo.clone())
            .create(
                &author,
                CreateArticleInput {
                    title: "Another article".to_string(),
                    description: "d".to_string(),
                    body: "b".to_string(),
                    tag_list: vec![],
                },
            )
            .await
            .unwrap();

        let use_case = CommentsUseCase::new(repo);
        let comment = use_case
            .add(&author, "how-to-train-your-dragon", "Hi".to_string())
            .await
            .unwrap();

        let err = use_case
            .delete(&author, "another-article", &comment.comment_id)
            .await
            .unwrap_err();

        assert!(matches!(err, SocialError::CommentNotFound));
    }
}
