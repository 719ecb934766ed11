//! Error types for the social services.
//! One taxonomy across every operation: validation, missing entities,
//! authorization denials, duplicate follows, and opaque storage failures.
//! Errors are local to a single operation; nothing here is retried.
use faithconnect_repository::RepositoryError;
use thiserror::Error;

/// Represents errors surfaced by the social service layer.
#[derive(Debug, Error)]
pub enum SocialError {
    /// A required field was missing or empty. No state was changed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A role, ownership, or follow-gate rule denied the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The operation's target is not valid for it (wrong role, self-edge).
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// The follow edge already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// Underlying store failure, reported opaquely and never retried here.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl SocialError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }
}
