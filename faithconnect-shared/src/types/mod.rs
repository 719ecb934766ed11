mod content;
mod engagement;
mod message;
mod notification;
mod page;
mod target;
mod user;

pub use content::{ContentAuthor, NewPost, NewReel, Post, PostCreated, PostView, Reel, ReelCreated, ReelView};
pub use engagement::{Comment, CommentView, EngagementCounts, ToggleOutcome};
pub use message::{ConversationSummary, Message, MessageView};
pub use notification::{
    FanOutNotification, FanOutStatus, NewNotification, Notification, NotificationKind, NotificationView,
};
pub use page::Page;
pub use target::{MarkKind, TargetKind, TargetRef};
pub use user::{
    FollowedLeader, FollowerEntry, LeaderEntry, ProfileUpdate, ProfileView, Role, UserDisplay, UserId,
    UserProfile,
};
