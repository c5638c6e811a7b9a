//! HTTP Handlers
//!
//! Viewer identity comes from request extensions: `AuthUser` on
//! protected routes, `MaybeUser` on optional ones.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::presentation::middleware::{AuthUser, MaybeUser};
use kernel::id::CommentId;
use uuid::Uuid;

use crate::application::{
    ArticlesUseCase, CommentsUseCase, CreateArticleInput, FavoritesUseCase, FollowUseCase,
    ProfilesUseCase, TagsUseCase, UpdateArticleInput,
};
use crate::domain::entity::article::Article;
use crate::domain::entity::profile::Profile;
use crate::domain::repository::{
    ArticleRepository, CommentRepository, FavoriteRepository, FollowRepository,
    ProfileRepository, TagRepository,
};
use crate::error::{SocialError, SocialResult};
use crate::presentation::dto::{
    ArticleResponse, ArticlesResponse, CommentResponse, CommentsResponse, CreateArticleRequest,
    CreateCommentRequest, ProfileResponse, TagsResponse, UpdateArticleRequest,
};
use crate::presentation::presenter::{article_view, comment_view, profile_view};

/// Everything the social handlers need from persistence
pub trait SocialRepository:
    ProfileRepository
    + ArticleRepository
    + CommentRepository
    + TagRepository
    + FollowRepository
    + FavoriteRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> SocialRepository for T where
    T: ProfileRepository
        + ArticleRepository
        + CommentRepository
        + TagRepository
        + FollowRepository
        + FavoriteRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}

/// Shared state for social handlers
#[derive(Clone)]
pub struct SocialAppState<R>
where
    R: SocialRepository,
{
    pub repo: Arc<R>,
}

/// Article authors always have an account row (FK); a miss here is a
/// data integrity failure, not a client error.
async fn author_profile<R>(repo: &R, article: &Article) -> SocialResult<Profile>
where
    R: SocialRepository,
{
    repo.find_profile_by_id(&article.author_id)
        .await?
        .ok_or_else(|| SocialError::Internal("article author has no profile".to_string()))
}

// ============================================================================
// Profiles & follow
// ============================================================================

/// GET /api/profiles/{username}
pub async fn get_profile<R>(
    State(state): State<SocialAppState<R>>,
    Extension(viewer): Extension<MaybeUser>,
    Path(username): Path<String>,
) -> SocialResult<Json<ProfileResponse>>
where
    R: SocialRepository,
{
    let profile = ProfilesUseCase::new(state.repo.clone()).get(&username).await?;

    let body = profile_view(state.repo.as_ref(), &profile, viewer.0.as_ref()).await?;

    Ok(Json(ProfileResponse { profile: body }))
}

/// POST /api/profiles/{username}/follow
pub async fn follow_profile<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
) -> SocialResult<Json<ProfileResponse>>
where
    R: SocialRepository,
{
    let subject = FollowUseCase::new(state.repo.clone())
        .follow(&auth.user_id, &username)
        .await?;

    let body = profile_view(state.repo.as_ref(), &subject, Some(&auth.user_id)).await?;

    Ok(Json(ProfileResponse { profile: body }))
}

/// DELETE /api/profiles/{username}/follow
pub async fn unfollow_profile<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
) -> SocialResult<Json<ProfileResponse>>
where
    R: SocialRepository,
{
    let subject = FollowUseCase::new(state.repo.clone())
        .unfollow(&auth.user_id, &username)
        .await?;

    let body = profile_view(state.repo.as_ref(), &subject, Some(&auth.user_id)).await?;

    Ok(Json(ProfileResponse { profile: body }))
}

// ============================================================================
// Articles
// ============================================================================

/// GET /api/articles
pub async fn list_articles<R>(
    State(state): State<SocialAppState<R>>,
    Extension(viewer): Extension<MaybeUser>,
) -> SocialResult<Json<ArticlesResponse>>
where
    R: SocialRepository,
{
    let articles = ArticlesUseCase::new(state.repo.clone()).list().await?;

    let mut bodies = Vec::with_capacity(articles.len());
    for article in &articles {
        let author = author_profile(state.repo.as_ref(), article).await?;
        bodies.push(article_view(state.repo.as_ref(), article, &author, viewer.0.as_ref()).await?);
    }

    let articles_count = bodies.len();

    Ok(Json(ArticlesResponse {
        articles: bodies,
        articles_count,
    }))
}

/// POST /api/articles
pub async fn create_article<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateArticleRequest>,
) -> SocialResult<(StatusCode, Json<ArticleResponse>)>
where
    R: SocialRepository,
{
    let article = ArticlesUseCase::new(state.repo.clone())
        .create(
            &auth.user_id,
            CreateArticleInput {
                title: req.article.title,
                description: req.article.description,
                body: req.article.body,
                tag_list: req.article.tag_list,
            },
        )
        .await?;

    let author = author_profile(state.repo.as_ref(), &article).await?;
    let body = article_view(state.repo.as_ref(), &article, &author, Some(&auth.user_id)).await?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article: body })))
}

/// GET /api/articles/{slug}
pub async fn get_article<R>(
    State(state): State<SocialAppState<R>>,
    Extension(viewer): Extension<MaybeUser>,
    Path(slug): Path<String>,
) -> SocialResult<Json<ArticleResponse>>
where
    R: SocialRepository,
{
    let article = ArticlesUseCase::new(state.repo.clone()).get(&slug).await?;

    let author = author_profile(state.repo.as_ref(), &article).await?;
    let body = article_view(state.repo.as_ref(), &article, &author, viewer.0.as_ref()).await?;

    Ok(Json(ArticleResponse { article: body }))
}

/// PUT /api/articles/{slug}
pub async fn update_article<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateArticleRequest>,
) -> SocialResult<Json<ArticleResponse>>
where
    R: SocialRepository,
{
    let article = ArticlesUseCase::new(state.repo.clone())
        .update(
            &auth.user_id,
            &slug,
            UpdateArticleInput {
                title: req.article.title,
                description: req.article.description,
                body: req.article.body,
            },
        )
        .await?;

    let author = author_profile(state.repo.as_ref(), &article).await?;
    let body = article_view(state.repo.as_ref(), &article, &author, Some(&auth.user_id)).await?;

    Ok(Json(ArticleResponse { article: body }))
}

/// DELETE /api/articles/{slug}
pub async fn delete_article<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> SocialResult<StatusCode>
where
    R: SocialRepository,
{
    ArticlesUseCase::new(state.repo.clone())
        .delete(&auth.user_id, &slug)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Favorites
// ============================================================================

/// POST /api/articles/{slug}/favorite
pub async fn favorite_article<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> SocialResult<Json<ArticleResponse>>
where
    R: SocialRepository,
{
    let article = FavoritesUseCase::new(state.repo.clone())
        .favorite(&auth.user_id, &slug)
        .await?;

    let author = author_profile(state.repo.as_ref(), &article).await?;
    let body = article_view(state.repo.as_ref(), &article, &author, Some(&auth.user_id)).await?;

    Ok(Json(ArticleResponse { article: body }))
}

/// DELETE /api/articles/{slug}/favorite
pub async fn unfavorite_article<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> SocialResult<Json<ArticleResponse>>
where
    R: SocialRepository,
{
    let article = FavoritesUseCase::new(state.repo.clone())
        .unfavorite(&auth.user_id, &slug)
        .await?;

    let author = author_profile(state.repo.as_ref(), &article).await?;
    let body = article_view(state.repo.as_ref(), &article, &author, Some(&auth.user_id)).await?;

    Ok(Json(ArticleResponse { article: body }))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/articles/{slug}/comments
pub async fn list_comments<R>(
    State(state): State<SocialAppState<R>>,
    Extension(viewer): Extension<MaybeUser>,
    Path(slug): Path<String>,
) -> SocialResult<Json<CommentsResponse>>
where
    R: SocialRepository,
{
    let comments = CommentsUseCase::new(state.repo.clone()).list(&slug).await?;

    let mut bodies = Vec::with_capacity(comments.len());
    for comment in &comments {
        let author = state
            .repo
            .find_profile_by_id(&comment.author_id)
            .await?
            .ok_or_else(|| SocialError::Internal("comment author has no profile".to_string()))?;
        bodies.push(comment_view(state.repo.as_ref(), comment, &author, viewer.0.as_ref()).await?);
    }

    Ok(Json(CommentsResponse { comments: bodies }))
}

/// POST /api/articles/{slug}/comments
pub async fn add_comment<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
    Json(req): Json<CreateCommentRequest>,
) -> SocialResult<(StatusCode, Json<CommentResponse>)>
where
    R: SocialRepository,
{
    let comment = CommentsUseCase::new(state.repo.clone())
        .add(&auth.user_id, &slug, req.comment.body)
        .await?;

    let author = state
        .repo
        .find_profile_by_id(&comment.author_id)
        .await?
        .ok_or_else(|| SocialError::Internal("comment author has no profile".to_string()))?;
    let body = comment_view(state.repo.as_ref(), &comment, &author, Some(&auth.user_id)).await?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment: body })))
}

/// DELETE /api/articles/{slug}/comments/{id}
pub async fn delete_comment<R>(
    State(state): State<SocialAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path((slug, comment_id)): Path<(String, Uuid)>,
) -> SocialResult<StatusCode>
where
    R: SocialRepository,
{
    CommentsUseCase::new(state.repo.clone())
        .delete(&auth.user_id, &slug, &CommentId::from_uuid(comment_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Tags
// ============================================================================

/// GET /api/tags
pub async fn list_tags<R>(
    State(state): State<SocialAppState<R>>,
) -> SocialResult<Json<TagsResponse>>
where
    R: SocialRepository,
{
    let tags = TagsUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(TagsResponse { tags }))
}
