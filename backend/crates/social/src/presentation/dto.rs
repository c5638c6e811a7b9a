//! API DTOs (Data Transfer Objects)
//!
//! Payloads are wrapped in entity envelopes (`profile`, `article`,
//! `comment`, `tags`). Response bodies are camelCase; timestamps are
//! RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Profiles
// ============================================================================

/// Profile response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileBody,
}

/// Rendered profile; `following` is viewer-dependent
#[derive(Debug, Clone, Serialize)]
pub struct ProfileBody {
    pub username: String,
    pub bio: String,
    pub image: Option<String>,
    pub following: bool,
}

// ============================================================================
// Articles
// ============================================================================

/// Create article request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleRequest {
    pub article: CreateArticleRequestBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequestBody {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

/// Update article request body. Absent fields are untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArticleRequest {
    pub article: UpdateArticleRequestBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticleRequestBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

/// Single article response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleBody,
}

/// Article list response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleBody>,
    pub articles_count: usize,
}

/// Rendered article; `favorited` and `favoritesCount` are recomputed
/// from the relation store on every render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBody {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileBody,
}

// ============================================================================
// Comments
// ============================================================================

/// Create comment request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: CreateCommentRequestBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequestBody {
    pub body: String,
}

/// Single comment response envelope
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub comment: CommentBody,
}

/// Comment list response envelope
#[derive(Debug, Clone, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentBody>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: ProfileBody,
}

// ============================================================================
// Tags
// ============================================================================

/// Tag list response envelope
#[derive(Debug, Clone, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}
