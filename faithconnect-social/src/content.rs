//! Content publication and feeds.
//!
//! Only leaders publish. A publish commits the content row first and then
//! fans out follower notifications; a failed fan-out degrades the outcome
//! instead of rolling the content back, and is logged at warn level.
//! Posts are author-deletable; reels have no delete operation.
use std::sync::Arc;

use faithconnect_repository::ContentRepository;
use faithconnect_shared::types::{
    FanOutStatus, NewPost, NewReel, Page, PostCreated, PostView, ReelCreated, ReelView,
    TargetKind, TargetRef, UserId,
};
use tracing::warn;
use uuid::Uuid;

use crate::errors::SocialError;
use crate::notifications::NotificationService;
use crate::policy::{self, Actor, Decision, SocialAction};

/// Service over posts and reels.
pub struct ContentService {
    content: Arc<dyn ContentRepository>,
    notifications: Arc<NotificationService>,
}

impl ContentService {
    pub fn new(content: Arc<dyn ContentRepository>, notifications: Arc<NotificationService>) -> Self {
        Self {
            content,
            notifications,
        }
    }

    async fn fan_out(
        &self,
        actor: &Actor,
        content_id: Uuid,
        kind: TargetKind,
        caption: Option<&str>,
    ) -> FanOutStatus {
        match self
            .notifications
            .fan_out_new_content(actor.id, content_id, kind, caption)
            .await
        {
            Ok(recipients) => FanOutStatus::Delivered { recipients },
            Err(error) => {
                warn!(%error, content_id = %content_id, "content created but follower fan-out failed");
                FanOutStatus::Failed
            }
        }
    }

    /// Publishes a post and broadcasts it to the actor's followers.
    pub async fn create_post(
        &self,
        actor: &Actor,
        new_post: NewPost,
    ) -> Result<PostCreated, SocialError> {
        if let Decision::Deny(reason) = policy::authorize(actor, &SocialAction::PublishContent) {
            return Err(SocialError::forbidden(reason.message()));
        }

        let post = self.content.insert_post(actor.id, &new_post).await?;
        let fan_out = self
            .fan_out(actor, post.id, TargetKind::Post, post.caption.as_deref())
            .await;

        Ok(PostCreated { post, fan_out })
    }

    /// Publishes a reel. A video reference is required.
    pub async fn create_reel(
        &self,
        actor: &Actor,
        new_reel: NewReel,
    ) -> Result<ReelCreated, SocialError> {
        let video_url = match new_reel.video_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                return Err(SocialError::validation(
                    "a video file is required for reels",
                ));
            }
        };

        if let Decision::Deny(reason) = policy::authorize(actor, &SocialAction::PublishContent) {
            return Err(SocialError::forbidden(reason.message()));
        }

        let reel = self
            .content
            .insert_reel(actor.id, new_reel.caption.as_deref(), video_url)
            .await?;
        let fan_out = self.fan_out(actor, reel.id, TargetKind::Reel, None).await;

        Ok(ReelCreated { reel, fan_out })
    }

    /// Deletes a post. Only its author may delete it.
    pub async fn delete_post(&self, actor: &Actor, post_id: Uuid) -> Result<(), SocialError> {
        let Some(owner_id) = self.content.owner_of(TargetRef::post(post_id)).await? else {
            return Err(SocialError::NotFound("post"));
        };

        if let Decision::Deny(reason) =
            policy::authorize(actor, &SocialAction::DeleteContent { owner_id })
        {
            return Err(SocialError::forbidden(reason.message()));
        }

        self.content.delete_post(post_id).await?;
        Ok(())
    }

    /// All posts, newest first, enriched relative to an optional viewer.
    pub async fn explore_posts(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, SocialError> {
        Ok(self.content.explore_posts(viewer, page).await?)
    }

    /// Posts from the leaders the actor follows, newest first.
    pub async fn following_posts(
        &self,
        actor: &Actor,
        page: Page,
    ) -> Result<Vec<PostView>, SocialError> {
        Ok(self.content.following_posts(actor.id, page).await?)
    }

    /// A single author's posts, newest first.
    pub async fn user_posts(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, SocialError> {
        Ok(self.content.user_posts(user_id, viewer, page).await?)
    }

    /// All reels, newest first.
    pub async fn list_reels(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<ReelView>, SocialError> {
        Ok(self.content.list_reels(viewer, page).await?)
    }

    /// A single author's reels, newest first.
    pub async fn user_reels(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Vec<ReelView>, SocialError> {
        Ok(self.content.user_reels(user_id, viewer).await?)
    }
}
