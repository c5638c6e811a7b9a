//! Presenters
//!
//! Compose an entity, an optional viewer, and the relation store into
//! a response body. The viewer-dependent fields (`following`,
//! `favorited`, `favoritesCount`) are recomputed from the store on
//! every render and never cached.

use kernel::id::UserId;

use crate::domain::entity::article::Article;
use crate::domain::entity::comment::Comment;
use crate::domain::entity::profile::Profile;
use crate::domain::repository::{FavoriteRepository, FollowRepository};
use crate::error::SocialResult;
use crate::presentation::dto::{ArticleBody, CommentBody, ProfileBody};

/// Render a profile for a viewer. Anonymous viewers never follow.
pub async fn profile_view<R>(
    repo: &R,
    profile: &Profile,
    viewer: Option<&UserId>,
) -> SocialResult<ProfileBody>
where
    R: FollowRepository,
{
    let following = match viewer {
        Some(viewer) => repo.follow_exists(viewer, &profile.user_id).await?,
        None => false,
    };

    Ok(ProfileBody {
        username: profile.username.clone(),
        bio: profile.bio.clone(),
        image: profile.image.clone(),
        following,
    })
}

/// Render an article for a viewer
pub async fn article_view<R>(
    repo: &R,
    article: &Article,
    author: &Profile,
    viewer: Option<&UserId>,
) -> SocialResult<ArticleBody>
where
    R: FollowRepository + FavoriteRepository,
{
    let favorited = match viewer {
        Some(viewer) => repo.favorite_exists(viewer, &article.article_id).await?,
        None => false,
    };

    let favorites_count = repo.count_favorites(&article.article_id).await?;

    let author = profile_view(repo, author, viewer).await?;

    Ok(ArticleBody {
        slug: article.slug.as_str().to_string(),
        title: article.title.clone(),
        description: article.description.clone(),
        body: article.body.clone(),
        tag_list: article.tag_list.clone(),
        created_at: article.created_at,
        updated_at: article.updated_at,
        favorited,
        favorites_count,
        author,
    })
}

/// Render a comment for a viewer
pub async fn comment_view<R>(
    repo: &R,
    comment: &Comment,
    author: &Profile,
    viewer: Option<&UserId>,
) -> SocialResult<CommentBody>
where
    R: FollowRepository,
{
    let author = profile_view(repo, author, viewer).await?;

    Ok(CommentBody {
        id: comment.comment_id.into_uuid(),
        body: comment.body.clone(),
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        author,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemorySocialRepository;
    use crate::application::{ArticlesUseCase, CreateArticleInput, FollowUseCase};
    use crate::domain::repository::ProfileRepository;
    use std::sync::Arc;

    async fn setup() -> (Arc<InMemorySocialRepository>, UserId, Profile, Article) {
        let repo = Arc::new(InMemorySocialRepository::default());
        let author_id = repo.seed_profile("jake");
        let viewer = repo.seed_profile("jane");

        let author = repo
            .find_profile_by_id(&author_id)
            .await
            .unwrap()
            .unwrap();

        let article = ArticlesUseCase::new(repo.clone())
            .create(
                &author_id,
                CreateArticleInput {
                    title: "How to train your dragon".to_string(),
                    description: "Ever wonder how?".to_string(),
                    body: "Very carefully.".to_string(),
                    tag_list: vec!["dragons".to_string()],
                },
            )
            .await
            .unwrap();

        (repo, viewer, author, article)
    }

    #[tokio::test]
    async fn following_reflects_the_store_for_the_viewer() {
        let (repo, viewer, author, _) = setup().await;

        let before = profile_view(repo.as_ref(), &author, Some(&viewer))
            .await
            .unwrap();
        assert!(!before.following);

        FollowUseCase::new(repo.clone())
            .follow(&viewer, "jake")
            .await
            .unwrap();

        let after = profile_view(repo.as_ref(), &author, Some(&viewer))
            .await
            .unwrap();
        assert!(after.following);
    }

    #[tokio::test]
    async fn anonymous_viewer_never_follows() {
        let (repo, viewer, author, _) = setup().await;

        FollowUseCase::new(repo.clone())
            .follow(&viewer, "jake")
            .await
            .unwrap();

        let view = profile_view(repo.as_ref(), &author, None).await.unwrap();
        assert!(!view.following);
    }

    #[tokio::test]
    async fn favorited_and_count_reflect_the_store() {
        let (repo, viewer, author, article) = setup().await;

        let before = article_view(repo.as_ref(), &article, &author, Some(&viewer))
            .await
            .unwrap();
        assert!(!before.favorited);
        assert_eq!(before.favorites_count, 0);

        repo.add_favorite(&viewer, &article.article_id).await.unwrap();

        let after = article_view(repo.as_ref(), &article, &author, Some(&viewer))
            .await
            .unwrap();
        assert!(after.favorited);
        assert_eq!(after.favorites_count, 1);
    }

    #[tokio::test]
    async fn count_is_viewer_independent_but_favorited_is_not() {
        let (repo, viewer, author, article) = setup().await;
        let other = repo.seed_profile("john");

        repo.add_favorite(&other, &article.article_id).await.unwrap();

        let view = article_view(repo.as_ref(), &article, &author, Some(&viewer))
            .await
            .unwrap();
        assert!(!view.favorited);
        assert_eq!(view.favorites_count, 1);

        let anon = article_view(repo.as_ref(), &article, &author, None)
            .await
            .unwrap();
        assert!(!anon.favorited);
        assert_eq!(anon.favorites_count, 1);
    }

    #[tokio::test]
    async fn comment_author_is_rendered_as_a_profile() {
        let (repo, viewer, author, article) = setup().await;

        FollowUseCase::new(repo.clone())
            .follow(&viewer, "jake")
            .await
            .unwrap();

        let comment = crate::domain::entity::comment::Comment::new(
            article.article_id,
            author.user_id,
            "Nice dragon".to_string(),
        );

        let view = comment_view(repo.as_ref(), &comment, &author, Some(&viewer))
            .await
            .unwrap();

        assert_eq!(view.author.username, "jake");
        assert!(view.author.following);
    }
}
