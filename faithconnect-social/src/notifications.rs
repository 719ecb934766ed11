//! The notification fan-out service.
//!
//! Records notifications for single recipients and broadcasts new content
//! to every follower of a leader in one set-based insert. Recipients pull
//! their notifications via the list/count operations; nothing is pushed.
use std::sync::Arc;

use faithconnect_repository::{NotificationRepository, UserRepository};
use faithconnect_shared::types::{
    FanOutNotification, NewNotification, NotificationKind, NotificationView, Page, TargetKind,
    UserId,
};
use uuid::Uuid;

use crate::errors::SocialError;
use crate::policy::Actor;

/// Fallback display name when the publishing leader cannot be resolved.
const UNKNOWN_LEADER: &str = "A leader you follow";

/// Service over notification records.
pub struct NotificationService {
    notifications: Arc<dyn NotificationRepository>,
    users: Arc<dyn UserRepository>,
}

impl NotificationService {
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            notifications,
            users,
        }
    }

    /// Records a notification for one recipient. Recipient existence is
    /// guaranteed by the calling context.
    pub async fn emit(&self, notification: NewNotification) -> Result<(), SocialError> {
        self.notifications.insert(&notification).await?;
        Ok(())
    }

    /// Broadcasts a new piece of content to every follower of its leader.
    ///
    /// One bulk insert per call; the row count scales with the follower
    /// set, never the statement count. The leader is the related user on
    /// each row and never a recipient. Returns how many followers were
    /// notified.
    pub async fn fan_out_new_content(
        &self,
        leader_id: UserId,
        content_id: Uuid,
        kind: TargetKind,
        caption: Option<&str>,
    ) -> Result<u64, SocialError> {
        let notification = match kind {
            TargetKind::Post => {
                let leader_name = self
                    .users
                    .get_user(leader_id)
                    .await?
                    .map(|u| u.full_name)
                    .unwrap_or_else(|| UNKNOWN_LEADER.to_string());
                FanOutNotification {
                    kind: NotificationKind::Post,
                    content: format!("{} posted: {}", leader_name, caption.unwrap_or("new content")),
                    related_post_id: Some(content_id),
                    related_reel_id: None,
                }
            }
            TargetKind::Reel => FanOutNotification {
                kind: NotificationKind::Reel,
                content: "posted a new reel".to_string(),
                related_post_id: None,
                related_reel_id: Some(content_id),
            },
        };

        let recipients = self
            .notifications
            .insert_for_followers(leader_id, &notification)
            .await?;
        Ok(recipients)
    }

    /// The actor's notifications, newest first, with related-user
    /// display enrichment.
    pub async fn list(
        &self,
        actor: &Actor,
        page: Page,
    ) -> Result<Vec<NotificationView>, SocialError> {
        Ok(self.notifications.list(actor.id, page).await?)
    }

    /// Marks one notification as read. Idempotent; `NotFound` only when
    /// no such notification is addressed to the actor.
    pub async fn mark_read(&self, actor: &Actor, id: Uuid) -> Result<(), SocialError> {
        if !self.notifications.mark_read(id, actor.id).await? {
            return Err(SocialError::NotFound("notification"));
        }
        Ok(())
    }

    /// Marks all of the actor's notifications as read. Idempotent.
    pub async fn mark_all_read(&self, actor: &Actor) -> Result<u64, SocialError> {
        Ok(self.notifications.mark_all_read(actor.id).await?)
    }

    /// Live count of the actor's unread notifications.
    pub async fn unread_count(&self, actor: &Actor) -> Result<i64, SocialError> {
        Ok(self.notifications.unread_count(actor.id).await?)
    }
}
