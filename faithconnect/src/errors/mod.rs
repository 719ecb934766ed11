//! Error types for application wiring.
//! Consolidates configuration problems and storage failures raised while
//! initializing the service stack.
use faithconnect_repository::RepositoryError;
use thiserror::Error;

/// Errors that can occur during dependency initialization.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
