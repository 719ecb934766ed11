//! The engagement ledger service.
//!
//! Likes and saves are idempotent toggles; comments are append-only.
//! Self-engagement never notifies. Comment notifications cover posts
//! only; reel comments are recorded silently. Likes notify owners for
//! both target kinds.
use std::sync::Arc;

use faithconnect_repository::{ContentRepository, EngagementRepository};
use faithconnect_shared::types::{
    Comment, CommentView, EngagementCounts, MarkKind, NewNotification, NotificationKind,
    TargetKind, TargetRef, ToggleOutcome,
};

use crate::errors::SocialError;
use crate::notifications::NotificationService;
use crate::policy::Actor;

/// Service over likes, saves, and comments.
pub struct EngagementService {
    engagement: Arc<dyn EngagementRepository>,
    content: Arc<dyn ContentRepository>,
    notifications: Arc<NotificationService>,
}

impl EngagementService {
    pub fn new(
        engagement: Arc<dyn EngagementRepository>,
        content: Arc<dyn ContentRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            engagement,
            content,
            notifications,
        }
    }

    /// Flips a mark on a target.
    ///
    /// Returns `applied: false` when an existing mark was removed and
    /// `applied: true` when one is now present. A duplicate insert lost
    /// to a concurrent request still counts as applied. A fresh `like`
    /// notifies the target owner unless the actor owns the target; saves
    /// never notify.
    pub async fn toggle_mark(
        &self,
        actor: &Actor,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<ToggleOutcome, SocialError> {
        let Some(owner_id) = self.content.owner_of(target).await? else {
            return Err(SocialError::NotFound("content"));
        };

        if self.engagement.delete_mark(actor.id, target, kind).await? {
            return Ok(ToggleOutcome { applied: false });
        }

        let inserted = self.engagement.insert_mark(actor.id, target, kind).await?;

        if inserted && kind == MarkKind::Like && owner_id != actor.id {
            let (content, related_post_id, related_reel_id) = match target.kind {
                TargetKind::Post => ("Someone liked your post", Some(target.id), None),
                TargetKind::Reel => ("Someone liked your reel", None, Some(target.id)),
            };
            self.notifications
                .emit(NewNotification {
                    recipient_id: owner_id,
                    kind: NotificationKind::Like,
                    content: content.to_string(),
                    related_user_id: Some(actor.id),
                    related_post_id,
                    related_reel_id,
                })
                .await?;
        }

        Ok(ToggleOutcome { applied: true })
    }

    /// Appends a comment to a target.
    ///
    /// Empty or whitespace-only content is rejected before any lookup.
    /// The owner of a commented post is notified unless they wrote the
    /// comment themselves; reel comments are recorded silently.
    pub async fn add_comment(
        &self,
        actor: &Actor,
        target: TargetRef,
        content: &str,
    ) -> Result<Comment, SocialError> {
        if content.trim().is_empty() {
            return Err(SocialError::validation("comment content is required"));
        }

        let Some(owner_id) = self.content.owner_of(target).await? else {
            return Err(SocialError::NotFound("content"));
        };

        let comment = self
            .engagement
            .insert_comment(actor.id, target, content)
            .await?;

        if owner_id != actor.id && target.kind == TargetKind::Post {
            self.notifications
                .emit(NewNotification {
                    recipient_id: owner_id,
                    kind: NotificationKind::Comment,
                    content: "Someone commented on your post".to_string(),
                    related_user_id: Some(actor.id),
                    related_post_id: Some(target.id),
                    related_reel_id: None,
                })
                .await?;
        }

        Ok(comment)
    }

    /// Comments for a target, most recent first, with author display
    /// fields.
    pub async fn list_comments(
        &self,
        target: TargetRef,
    ) -> Result<Vec<CommentView>, SocialError> {
        Ok(self.engagement.list_comments(target).await?)
    }

    /// Live like/comment counts for a target.
    pub async fn counts(&self, target: TargetRef) -> Result<EngagementCounts, SocialError> {
        Ok(self.engagement.counts(target).await?)
    }
}
