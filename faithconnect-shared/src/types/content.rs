use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{FanOutStatus, Role, UserId};

/// A stored post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: UserId,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored reel record. Reels always carry a video and have no delete
/// operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    pub id: Uuid,
    pub author_id: UserId,
    pub caption: Option<String>,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input for publishing a post. The media URL has already been stored by
/// the excluded upload collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
}

/// Input for publishing a reel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReel {
    pub caption: Option<String>,
    pub video_url: Option<String>,
}

/// Author display fields attached to feed rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAuthor {
    pub id: UserId,
    pub name: String,
    pub photo: Option<String>,
    pub role: Role,
    pub faith: Option<String>,
}

/// A post enriched for a feed listing: live counts and viewer flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub caption: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_liked: bool,
    pub is_saved: bool,
    pub author: ContentAuthor,
}

/// A reel enriched for a feed listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelView {
    pub id: Uuid,
    pub caption: Option<String>,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_liked: bool,
    pub is_saved: bool,
    pub author: ContentAuthor,
}

/// Outcome of publishing a post: the stored record plus the follower
/// fan-out result, which can be degraded without failing the publish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreated {
    pub post: Post,
    pub fan_out: FanOutStatus,
}

/// Outcome of publishing a reel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelCreated {
    pub reel: Reel,
    pub fan_out: FanOutStatus,
}
