use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{TargetRef, UserDisplay, UserId};

/// A stored comment. Append-only; there is no edit or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: UserId,
    pub target: TargetRef,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment enriched with its author's display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: UserDisplay,
}

/// Live engagement counts for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub likes: i64,
    pub comments: i64,
}

/// Result of an idempotent mark flip: `applied` is true when the mark is
/// now present, false when the flip removed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub applied: bool,
}
