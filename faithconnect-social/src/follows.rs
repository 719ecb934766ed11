//! The follow graph service.
//!
//! Enforces who may follow whom and emits the `follow` notification on a
//! new edge. The storage layer's uniqueness constraint is the final
//! arbiter against concurrent duplicate follows; the role and self-edge
//! checks run first so the more specific error wins.
use std::sync::Arc;

use faithconnect_repository::{FollowRepository, UserRepository};
use faithconnect_shared::types::{FollowedLeader, NewNotification, NotificationKind, UserId};

use crate::errors::SocialError;
use crate::notifications::NotificationService;
use crate::policy::{self, Actor, Decision, SocialAction};

/// Service over follower→leader edges.
pub struct FollowService {
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowRepository>,
    notifications: Arc<NotificationService>,
}

impl FollowService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        follows: Arc<dyn FollowRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            users,
            follows,
            notifications,
        }
    }

    /// Creates a follow edge from the actor to a leader.
    ///
    /// Fails with `NotFound` for an unknown leader, `InvalidTarget` for a
    /// non-leader target or a self-follow, and `AlreadyExists` when the
    /// edge is already present. On success the leader receives a `follow`
    /// notification referencing the actor.
    pub async fn follow(&self, actor: &Actor, leader_id: UserId) -> Result<(), SocialError> {
        let Some(leader) = self.users.get_user(leader_id).await? else {
            return Err(SocialError::NotFound("leader"));
        };

        if let Decision::Deny(reason) =
            policy::authorize(actor, &SocialAction::Follow { target: &leader })
        {
            return Err(SocialError::invalid_target(reason.message()));
        }

        if !self.follows.insert(actor.id, leader_id).await? {
            return Err(SocialError::already_exists(
                "you are already following this leader",
            ));
        }

        self.notifications
            .emit(NewNotification {
                recipient_id: leader_id,
                kind: NotificationKind::Follow,
                content: "started following you".to_string(),
                related_user_id: Some(actor.id),
                related_post_id: None,
                related_reel_id: None,
            })
            .await?;

        Ok(())
    }

    /// Removes a follow edge. No notification is emitted on unfollow.
    pub async fn unfollow(&self, actor: &Actor, leader_id: UserId) -> Result<(), SocialError> {
        if !self.follows.delete(actor.id, leader_id).await? {
            return Err(SocialError::NotFound("follow edge"));
        }
        Ok(())
    }

    /// The leaders the actor follows, most-recently-followed first.
    pub async fn list_leaders(&self, actor: &Actor) -> Result<Vec<FollowedLeader>, SocialError> {
        Ok(self.follows.list_leaders(actor.id).await?)
    }

    /// Pure edge lookup; always succeeds.
    pub async fn is_following(
        &self,
        actor: &Actor,
        leader_id: UserId,
    ) -> Result<bool, SocialError> {
        Ok(self.follows.exists(actor.id, leader_id).await?)
    }
}
