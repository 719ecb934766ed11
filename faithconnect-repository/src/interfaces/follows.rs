//! This module defines the `FollowRepository` trait over follower→leader
//! edges. Uniqueness of an edge is enforced by the store itself: the insert
//! reports whether a row was actually created so concurrent duplicates
//! surface as "already present" rather than double inserts.
use faithconnect_shared::types::{FollowedLeader, UserId};

use crate::errors::RepositoryError;

/// Interface for storing and querying follow edges.
#[async_trait::async_trait]
pub trait FollowRepository: Send + Sync {
    /// Inserts a follow edge. Returns `false` when the edge already existed;
    /// the store's uniqueness constraint is the final arbiter under
    /// concurrent identical requests.
    async fn insert(&self, follower_id: UserId, leader_id: UserId)
        -> Result<bool, RepositoryError>;

    /// Deletes a follow edge. Returns `false` when no such edge existed.
    async fn delete(&self, follower_id: UserId, leader_id: UserId)
        -> Result<bool, RepositoryError>;

    /// Pure edge lookup.
    async fn exists(&self, follower_id: UserId, leader_id: UserId)
        -> Result<bool, RepositoryError>;

    /// Lists the leaders a user follows, annotated with per-leader post
    /// counts and the edge timestamp, most-recently-followed first.
    async fn list_leaders(&self, follower_id: UserId)
        -> Result<Vec<FollowedLeader>, RepositoryError>;
}
