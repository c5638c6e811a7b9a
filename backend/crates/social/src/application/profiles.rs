//! Profile Read Use Case

use std::sync::Arc;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::{SocialError, SocialResult};

/// Profile read use case
pub struct ProfilesUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> ProfilesUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, username: &str) -> SocialResult<Profile> {
        self.repo
            .find_profile_by_username(username)
            .await?
            .ok_or(SocialError::UserNotFound)
    }
}
