//! The messaging channel service.
//!
//! Sends are gated by the follow graph for worshiper senders; leaders may
//! message anyone. Listing a thread marks the counterpart's unread
//! messages as read; clients rely on that coupling, so it stays, but the
//! mark step is also callable on its own via `mark_delivered`.
use std::sync::Arc;

use faithconnect_repository::{FollowRepository, MessageRepository, UserRepository};
use faithconnect_shared::types::{
    ConversationSummary, Message, MessageView, NewNotification, NotificationKind, Page, Role,
    UserId,
};
use uuid::Uuid;

use crate::errors::SocialError;
use crate::notifications::NotificationService;
use crate::policy::{self, Actor, Decision, SocialAction};

/// Service over direct messages between two users.
pub struct MessagingService {
    messages: Arc<dyn MessageRepository>,
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowRepository>,
    notifications: Arc<NotificationService>,
}

impl MessagingService {
    pub fn new(
        messages: Arc<dyn MessageRepository>,
        users: Arc<dyn UserRepository>,
        follows: Arc<dyn FollowRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            messages,
            users,
            follows,
            notifications,
        }
    }

    /// Sends a message from the actor to a receiver.
    ///
    /// Empty content is rejected first, then receiver existence, then the
    /// role/follow gate. The follow edge is checked at send time only. On
    /// success the receiver gets a `message` notification.
    pub async fn send(
        &self,
        actor: &Actor,
        receiver_id: UserId,
        content: &str,
    ) -> Result<Message, SocialError> {
        if content.trim().is_empty() {
            return Err(SocialError::validation("message content is required"));
        }

        let Some(receiver) = self.users.get_user(receiver_id).await? else {
            return Err(SocialError::NotFound("receiver"));
        };

        let follows_receiver = match (actor.role, receiver.role) {
            (Role::Worshiper, Role::Leader) => self.follows.exists(actor.id, receiver_id).await?,
            _ => false,
        };

        if let Decision::Deny(reason) = policy::authorize(
            actor,
            &SocialAction::SendMessage {
                receiver: &receiver,
                follows_receiver,
            },
        ) {
            return Err(SocialError::forbidden(reason.message()));
        }

        let message = self.messages.insert(actor.id, receiver_id, content).await?;

        self.notifications
            .emit(NewNotification {
                recipient_id: receiver_id,
                kind: NotificationKind::Message,
                content: "sent you a message".to_string(),
                related_user_id: Some(actor.id),
                related_post_id: None,
                related_reel_id: None,
            })
            .await?;

        Ok(message)
    }

    /// One summary row per counterpart, ordered by most recent message.
    pub async fn list_conversations(
        &self,
        actor: &Actor,
    ) -> Result<Vec<ConversationSummary>, SocialError> {
        Ok(self.messages.conversations(actor.id).await?)
    }

    /// The thread with a counterpart, oldest-first.
    ///
    /// Internally the window is fetched newest-first so limit/offset
    /// paginates from the end of the thread, then reversed for display.
    /// As a side effect every unread message from the counterpart is
    /// marked read.
    pub async fn list_messages(
        &self,
        actor: &Actor,
        counterpart_id: UserId,
        page: Page,
    ) -> Result<Vec<MessageView>, SocialError> {
        let mut thread = self.messages.thread(actor.id, counterpart_id, page).await?;
        self.mark_delivered(actor, counterpart_id).await?;
        thread.reverse();
        Ok(thread)
    }

    /// Marks every unread message from the counterpart to the actor as
    /// read. Returns how many messages transitioned.
    pub async fn mark_delivered(
        &self,
        actor: &Actor,
        counterpart_id: UserId,
    ) -> Result<u64, SocialError> {
        Ok(self
            .messages
            .mark_thread_read(actor.id, counterpart_id)
            .await?)
    }

    /// Marks a single received message as read.
    pub async fn mark_read(&self, actor: &Actor, message_id: Uuid) -> Result<(), SocialError> {
        if !self.messages.mark_read(message_id, actor.id).await? {
            return Err(SocialError::NotFound("message"));
        }
        Ok(())
    }
}
