//! This module defines the `ContentRepository` trait over posts and reels,
//! including the enriched feed listings with live engagement counts.
use faithconnect_shared::types::{
    NewPost, Page, Post, PostView, Reel, ReelView, TargetRef, UserId,
};
use uuid::Uuid;

use crate::errors::RepositoryError;

/// Interface for storing and listing published content.
///
/// Feed listings compute like/comment counts live; stored counters are
/// never consulted.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    async fn insert_post(&self, author_id: UserId, post: &NewPost)
        -> Result<Post, RepositoryError>;

    async fn insert_reel(
        &self,
        author_id: UserId,
        caption: Option<&str>,
        video_url: &str,
    ) -> Result<Reel, RepositoryError>;

    /// Deletes a post row. Ownership is checked by the caller.
    async fn delete_post(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Resolves a content target to its author, or `None` if the target
    /// does not exist.
    async fn owner_of(&self, target: TargetRef) -> Result<Option<UserId>, RepositoryError>;

    /// All posts, newest first, enriched relative to an optional viewer.
    async fn explore_posts(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError>;

    /// Posts from leaders the given user follows, newest first.
    async fn following_posts(
        &self,
        follower_id: UserId,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError>;

    /// A single author's posts, newest first.
    async fn user_posts(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError>;

    /// All reels, newest first.
    async fn list_reels(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<ReelView>, RepositoryError>;

    /// A single author's reels, newest first.
    async fn user_reels(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Vec<ReelView>, RepositoryError>;
}
