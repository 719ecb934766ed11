//! This module defines the `NotificationRepository` trait. Fan-out to a
//! leader's followers is a single set-based insert, not per-follower round
//! trips.
use faithconnect_shared::types::{
    FanOutNotification, NewNotification, NotificationView, Page, UserId,
};
use uuid::Uuid;

use crate::errors::RepositoryError;

/// Interface for recording and reading notifications.
#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Records a notification for one recipient.
    async fn insert(&self, notification: &NewNotification) -> Result<(), RepositoryError>;

    /// Records one notification per follower of the leader in a single
    /// bulk statement. Returns the number of rows inserted.
    async fn insert_for_followers(
        &self,
        leader_id: UserId,
        notification: &FanOutNotification,
    ) -> Result<u64, RepositoryError>;

    /// Notifications for a user, newest first, with related-user display
    /// enrichment.
    async fn list(
        &self,
        user_id: UserId,
        page: Page,
    ) -> Result<Vec<NotificationView>, RepositoryError>;

    /// Marks one notification as read, scoped to its recipient. Returns
    /// `false` when no matching row exists.
    async fn mark_read(&self, id: Uuid, user_id: UserId) -> Result<bool, RepositoryError>;

    /// Marks all of a user's notifications as read.
    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, RepositoryError>;

    /// Live count of unread notifications.
    async fn unread_count(&self, user_id: UserId) -> Result<i64, RepositoryError>;
}
