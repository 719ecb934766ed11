//! This module defines the `MessageRepository` trait over direct messages
//! and the derived conversation summary view.
use faithconnect_shared::types::{ConversationSummary, Message, MessageView, Page, UserId};
use uuid::Uuid;

use crate::errors::RepositoryError;

/// Interface for storing messages and querying threads.
#[async_trait::async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts a message with `is_read = false` and returns the stored row.
    async fn insert(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: &str,
    ) -> Result<Message, RepositoryError>;

    /// One row per counterpart the user has exchanged messages with: the
    /// most recent message and the count of unread messages from that
    /// counterpart, ordered by last message time descending.
    async fn conversations(&self, user_id: UserId)
        -> Result<Vec<ConversationSummary>, RepositoryError>;

    /// The thread between two users, newest first, so limit/offset
    /// paginates from the end. The caller reverses for display order.
    async fn thread(
        &self,
        user_id: UserId,
        counterpart_id: UserId,
        page: Page,
    ) -> Result<Vec<MessageView>, RepositoryError>;

    /// Marks every unread message from `sender_id` to `receiver_id` as
    /// read. Returns the number of rows transitioned.
    async fn mark_thread_read(
        &self,
        receiver_id: UserId,
        sender_id: UserId,
    ) -> Result<u64, RepositoryError>;

    /// Marks one message as read, scoped to its receiver. Returns `false`
    /// when no matching row exists.
    async fn mark_read(&self, id: Uuid, receiver_id: UserId) -> Result<bool, RepositoryError>;
}
