//! Article Slug Value Object
//!
//! URL-safe identifier derived from the article title. Unique across
//! all articles (DB unique constraint + pre-check).

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum slug length
const SLUG_MAX_LENGTH: usize = 120;

/// Article slug value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    /// Derive a slug from an article title.
    ///
    /// Fails when the title contains no sluggable characters at all
    /// (e.g. only punctuation).
    pub fn from_title(title: &str) -> AppResult<Self> {
        let slug = slug::slugify(title);

        if slug.is_empty() {
            return Err(AppError::bad_request(
                "Title must contain at least one letter or digit",
            ));
        }

        if slug.len() > SLUG_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title too long: slug must be at most {} characters",
                SLUG_MAX_LENGTH
            )));
        }

        Ok(Self(slug))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value object, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
