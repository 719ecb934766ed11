use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{UserDisplay, UserId};

/// The event kind a notification was fanned out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Follow,
    Message,
    Like,
    Comment,
    Post,
    Reel,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Follow => "follow",
            NotificationKind::Message => "message",
            NotificationKind::Like => "like",
            NotificationKind::Comment => "comment",
            NotificationKind::Post => "post",
            NotificationKind::Reel => "reel",
        }
    }

    pub fn parse(value: &str) -> Option<NotificationKind> {
        match value {
            "follow" => Some(NotificationKind::Follow),
            "message" => Some(NotificationKind::Message),
            "like" => Some(NotificationKind::Like),
            "comment" => Some(NotificationKind::Comment),
            "post" => Some(NotificationKind::Post),
            "reel" => Some(NotificationKind::Reel),
            _ => None,
        }
    }
}

/// A notification to be recorded for a single recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    pub recipient_id: UserId,
    pub kind: NotificationKind,
    pub content: String,
    pub related_user_id: Option<UserId>,
    pub related_post_id: Option<Uuid>,
    pub related_reel_id: Option<Uuid>,
}

/// A notification broadcast to every follower of a leader in one bulk
/// insert. The leader is recorded as the related user on each row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanOutNotification {
    pub kind: NotificationKind,
    pub content: String,
    pub related_post_id: Option<Uuid>,
    pub related_reel_id: Option<Uuid>,
}

/// A stored notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: UserId,
    pub kind: NotificationKind,
    pub content: String,
    pub related_user_id: Option<UserId>,
    pub related_post_id: Option<Uuid>,
    pub related_reel_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification enriched with the related user's display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationView {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub related_user: Option<UserDisplay>,
    pub related_post_id: Option<Uuid>,
    pub related_reel_id: Option<Uuid>,
}

/// Whether a follower fan-out landed. A failed fan-out degrades the
/// publish outcome without rolling the content back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum FanOutStatus {
    Delivered { recipients: u64 },
    Failed,
}
