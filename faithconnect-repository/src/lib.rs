//! # FaithConnect Repository
//! This crate provides traits and implementations for interacting with the
//! social graph's persistent store. It includes definitions for errors,
//! interfaces, and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::RepositoryError;
pub use interfaces::{
    ContentRepository, EngagementRepository, FollowRepository, MessageRepository,
    NotificationRepository, UserRepository,
};
pub use postgres::{
    PostgresContentRepository, PostgresEngagementRepository, PostgresFollowRepository,
    PostgresMessageRepository, PostgresNotificationRepository, PostgresUserRepository,
};
