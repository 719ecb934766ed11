//! This module defines the `EngagementRepository` trait over likes, saves,
//! and comments. Mark uniqueness per (user, target, kind) is enforced by
//! the store; inserts report whether a row was actually created.
use faithconnect_shared::types::{
    Comment, CommentView, EngagementCounts, MarkKind, TargetRef, UserId,
};

use crate::errors::RepositoryError;

/// Interface for idempotent engagement marks and append-only comments.
#[async_trait::async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Inserts a mark. Returns `false` when the mark already existed, so a
    /// concurrent duplicate counts as already applied.
    async fn insert_mark(
        &self,
        user_id: UserId,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<bool, RepositoryError>;

    /// Removes a mark. Returns `false` when it was not present.
    async fn delete_mark(
        &self,
        user_id: UserId,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<bool, RepositoryError>;

    async fn insert_comment(
        &self,
        author_id: UserId,
        target: TargetRef,
        content: &str,
    ) -> Result<Comment, RepositoryError>;

    /// Comments for a target, most recent first, with author display fields.
    async fn list_comments(&self, target: TargetRef)
        -> Result<Vec<CommentView>, RepositoryError>;

    /// Live like/comment counts for a target.
    async fn counts(&self, target: TargetRef) -> Result<EngagementCounts, RepositoryError>;
}
