//! Follow Use Case
//!
//! Follow and unfollow by username. Both directions are idempotent:
//! following twice and unfollowing an absent relation are successes,
//! converging on the desired end state.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::{FollowRepository, ProfileRepository};
use crate::error::{SocialError, SocialResult};

/// Follow relation use case
pub struct FollowUseCase<R>
where
    R: ProfileRepository + FollowRepository,
{
    repo: Arc<R>,
}

impl<R> FollowUseCase<R>
where
    R: ProfileRepository + FollowRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Follow `username`. Returns the subject's profile.
    pub async fn follow(&self, follower: &UserId, username: &str) -> SocialResult<Profile> {
        let subject = self.resolve(username).await?;

        // Rejected before any write; store state is unchanged
        if subject.user_id == *follower {
            return Err(SocialError::SelfFollow);
        }

        self.repo.add_follow(follower, &subject.user_id).await?;

        tracing::info!(follower = %follower, followed = %subject.user_id, "Follow added");

        Ok(subject)
    }

    /// Unfollow `username`. A no-op when the relation does not exist.
    pub async fn unfollow(&self, follower: &UserId, username: &str) -> SocialResult<Profile> {
        let subject = self.resolve(username).await?;

        self.repo.remove_follow(follower, &subject.user_id).await?;

        tracing::info!(follower = %follower, followed = %subject.user_id, "Follow removed");

        Ok(subject)
    }

    async fn resolve(&self, username: &str) -> SocialResult<Profile> {
        self.repo
            .find_profile_by_username(username)
            .await?
            .ok_or(SocialError::UserNotFound)
    }
}
