//! Error types for the repository layer.
//! Defines the errors that can occur during database operations against the
//! social graph store.
use thiserror::Error;

/// Represents errors that can occur within the repository layer.
///
/// Consolidates database failures and row-decoding problems such as a role
/// or notification kind column holding an unknown value.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid role value: {0}")]
    InvalidRole(String),

    #[error("Invalid notification kind: {0}")]
    InvalidNotificationKind(String),
}
