use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of content an engagement action is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Reel,
}

/// A tagged reference to a single piece of content.
///
/// Storage keeps engagement rows with two mutually exclusive foreign keys;
/// in code the target is always this discriminated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl TargetRef {
    pub fn post(id: Uuid) -> Self {
        Self { kind: TargetKind::Post, id }
    }

    pub fn reel(id: Uuid) -> Self {
        Self { kind: TargetKind::Reel, id }
    }
}

/// The kind of engagement mark: a unique (user, target, kind) toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Like,
    Save,
}
