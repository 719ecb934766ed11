use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a registered user.
pub type UserId = Uuid;

/// The role a user was registered with. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worshiper,
    Leader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worshiper => "worshiper",
            Role::Leader => "leader",
        }
    }

    /// Parses the stored text representation of a role.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "worshiper" => Some(Role::Worshiper),
            "leader" => Some(Role::Leader),
            _ => None,
        }
    }
}

/// A user's profile as held by the identity directory.
///
/// Created once at registration by the excluded auth collaborator and
/// read everywhere else for display and authorization checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub role: Role,
    pub full_name: String,
    pub profile_photo: Option<String>,
    pub faith: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The display fields attached to enriched views (comment authors,
/// message parties, notification subjects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDisplay {
    pub id: UserId,
    pub name: String,
    pub photo: Option<String>,
}

/// A profile enriched with graph statistics relative to an optional viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub followers_count: i64,
    pub posts_count: i64,
    pub is_following: bool,
}

/// One row of the leader directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub id: UserId,
    pub full_name: String,
    pub role: Role,
    pub faith: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
    pub followers_count: i64,
}

/// One follower of a leader, annotated with when the edge was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerEntry {
    pub id: UserId,
    pub full_name: String,
    pub profile_photo: Option<String>,
    pub faith: Option<String>,
    pub followed_at: DateTime<Utc>,
}

/// A leader as seen from a follower's "my leaders" listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedLeader {
    pub id: UserId,
    pub full_name: String,
    pub profile_photo: Option<String>,
    pub role: Role,
    pub faith: Option<String>,
    pub bio: Option<String>,
    pub followed_at: DateTime<Utc>,
    pub posts_count: i64,
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub faith: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
}
