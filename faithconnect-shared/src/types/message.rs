use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Role, UserDisplay, UserId};

/// A stored direct message. Append-only except for the one-way
/// `is_read` transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A message in a thread listing, enriched with both parties' display
/// fields. `is_mine` is relative to the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageView {
    pub id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub sender: UserDisplay,
    pub receiver: UserDisplay,
    pub is_mine: bool,
}

/// The derived one-row-per-counterpart conversation summary. Not a
/// stored entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub counterpart: UserDisplay,
    pub counterpart_role: Role,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub unread_count: i64,
}
