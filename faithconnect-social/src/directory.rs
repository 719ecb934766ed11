//! The identity directory service.
//!
//! Resolves user ids to profiles for display and authorization, serves
//! the leader directory and follower listings, and applies partial
//! profile updates. User rows themselves are created by the excluded
//! registration collaborator.
use std::sync::Arc;

use faithconnect_repository::UserRepository;
use faithconnect_shared::types::{
    FollowerEntry, LeaderEntry, ProfileUpdate, ProfileView, UserId, UserProfile,
};

use crate::errors::SocialError;
use crate::policy::Actor;

/// Service over registered users.
pub struct DirectoryService {
    users: Arc<dyn UserRepository>,
}

impl DirectoryService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Resolves a user id to its profile.
    pub async fn get_user(&self, id: UserId) -> Result<UserProfile, SocialError> {
        self.users
            .get_user(id)
            .await?
            .ok_or(SocialError::NotFound("user"))
    }

    /// A profile enriched with follower/post counts; when a viewer is
    /// given, `is_following` reflects the viewer's edge to this user.
    pub async fn get_profile(
        &self,
        id: UserId,
        viewer: Option<&Actor>,
    ) -> Result<ProfileView, SocialError> {
        self.users
            .get_profile(id, viewer.map(|a| a.id))
            .await?
            .ok_or(SocialError::NotFound("user"))
    }

    /// The leader directory, most-followed first, optionally filtered by
    /// faith.
    pub async fn list_leaders(
        &self,
        faith: Option<&str>,
    ) -> Result<Vec<LeaderEntry>, SocialError> {
        Ok(self.users.list_leaders(faith).await?)
    }

    /// A leader's followers, most recent edge first.
    pub async fn list_followers(
        &self,
        leader_id: UserId,
    ) -> Result<Vec<FollowerEntry>, SocialError> {
        Ok(self.users.list_followers(leader_id).await?)
    }

    /// Applies a partial update to the actor's own profile.
    pub async fn update_profile(
        &self,
        actor: &Actor,
        changes: &ProfileUpdate,
    ) -> Result<UserProfile, SocialError> {
        self.users
            .update_profile(actor.id, changes)
            .await?
            .ok_or(SocialError::NotFound("user"))
    }
}
