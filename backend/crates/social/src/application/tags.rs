//! Tag Listing Use Case

use std::sync::Arc;

use crate::domain::repository::TagRepository;
use crate::error::SocialResult;

/// Tag listing use case
pub struct TagsUseCase<R>
where
    R: TagRepository,
{
    repo: Arc<R>,
}

impl<R> TagsUseCase<R>
where
    R: TagRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> SocialResult<Vec<String>> {
        self.repo.list_tags().await
    }
}
