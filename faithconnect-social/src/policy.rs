//! Centralized authorization policy.
//!
//! Every role-gated operation consults `authorize` before its body runs,
//! so the worshiper/leader rules live in one testable place instead of
//! inline conditionals scattered per operation.
use faithconnect_shared::types::{Role, UserId, UserProfile};

/// The authenticated actor context every core operation receives.
/// Identity has already been verified by the excluded auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

/// A gated operation together with the context the decision needs.
#[derive(Debug)]
pub enum SocialAction<'a> {
    /// Follow the given user.
    Follow { target: &'a UserProfile },
    /// Send a direct message. `follows_receiver` is whether the actor
    /// currently follows the receiver (only consulted for worshipers).
    SendMessage {
        receiver: &'a UserProfile,
        follows_receiver: bool,
    },
    /// Publish a post or reel.
    PublishContent,
    /// Delete a piece of content owned by `owner_id`.
    DeleteContent { owner_id: UserId },
}

/// The outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Why an operation was denied. The calling service maps the reason onto
/// its error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    TargetNotLeader,
    SelfFollow,
    ReceiverNotLeader,
    NotFollowingReceiver,
    NotALeader,
    NotOwner,
}

impl DenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::TargetNotLeader => "you can only follow religious leaders",
            DenyReason::SelfFollow => "you cannot follow yourself",
            DenyReason::ReceiverNotLeader => "worshipers can only message religious leaders",
            DenyReason::NotFollowingReceiver => "you must follow this leader to send messages",
            DenyReason::NotALeader => "only religious leaders can publish content",
            DenyReason::NotOwner => "you can only delete your own posts",
        }
    }
}

/// Evaluates whether `actor` may perform `action`.
///
/// Check order within an action is part of the API contract: for follows
/// the target's role is rejected before a self-edge so callers surface
/// the more specific error deterministically.
pub fn authorize(actor: &Actor, action: &SocialAction<'_>) -> Decision {
    match action {
        SocialAction::Follow { target } => {
            if target.role != Role::Leader {
                return Decision::Deny(DenyReason::TargetNotLeader);
            }
            if target.id == actor.id {
                return Decision::Deny(DenyReason::SelfFollow);
            }
            Decision::Allow
        }
        SocialAction::SendMessage {
            receiver,
            follows_receiver,
        } => {
            // Leaders may message anyone, including non-followers.
            if actor.role == Role::Leader {
                return Decision::Allow;
            }
            if receiver.role != Role::Leader {
                return Decision::Deny(DenyReason::ReceiverNotLeader);
            }
            if !follows_receiver {
                return Decision::Deny(DenyReason::NotFollowingReceiver);
            }
            Decision::Allow
        }
        SocialAction::PublishContent => {
            if actor.role == Role::Leader {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::NotALeader)
            }
        }
        SocialAction::DeleteContent { owner_id } => {
            if *owner_id == actor.id {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::NotOwner)
            }
        }
    }
}
