//! This module defines the `UserRepository` trait, the read/update interface
//! over registered users consumed by the identity directory.
use faithconnect_shared::types::{
    FollowerEntry, LeaderEntry, ProfileUpdate, ProfileView, UserId, UserProfile,
};

use crate::errors::RepositoryError;

/// Interface for resolving and updating user profiles.
///
/// User rows are created by the excluded registration collaborator; this
/// trait only reads them and applies partial profile updates.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolves a user id to its profile, or `None` if unknown.
    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError>;

    /// Fetches a profile enriched with follower/post counts and, when a
    /// viewer is given, whether the viewer follows the user.
    async fn get_profile(
        &self,
        id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Option<ProfileView>, RepositoryError>;

    /// Lists all leaders with their follower counts, optionally filtered by
    /// faith, most-followed first.
    async fn list_leaders(&self, faith: Option<&str>) -> Result<Vec<LeaderEntry>, RepositoryError>;

    /// Lists the followers of a leader, most recent edge first.
    async fn list_followers(&self, leader_id: UserId) -> Result<Vec<FollowerEntry>, RepositoryError>;

    /// Applies a partial profile update and returns the updated profile, or
    /// `None` if the user does not exist.
    async fn update_profile(
        &self,
        id: UserId,
        changes: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, RepositoryError>;
}
