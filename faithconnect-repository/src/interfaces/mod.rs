//! Repository trait definitions.
//! Each trait abstracts one table family of the social graph store so the
//! service layer can be exercised against test doubles.
mod content;
mod engagement;
mod follows;
mod messages;
mod notifications;
mod users;

pub use content::ContentRepository;
pub use engagement::EngagementRepository;
pub use follows::FollowRepository;
pub use messages::MessageRepository;
pub use notifications::NotificationRepository;
pub use users::UserRepository;
