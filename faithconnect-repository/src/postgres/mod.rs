//! PostgreSQL implementations of the repository traits.
//!
//! All implementations share a `sqlx::PgPool` and rely on the schema in
//! `migrations/`. Uniqueness invariants (follow edges, engagement marks)
//! live in the schema; inserts use `ON CONFLICT DO NOTHING` and report the
//! affected row count so callers can treat a rejected duplicate as already
//! applied.
mod content;
mod engagement;
mod follows;
mod messages;
mod notifications;
mod users;

pub use content::PostgresContentRepository;
pub use engagement::PostgresEngagementRepository;
pub use follows::PostgresFollowRepository;
pub use messages::PostgresMessageRepository;
pub use notifications::PostgresNotificationRepository;
pub use users::PostgresUserRepository;

use faithconnect_shared::types::{NotificationKind, Role};
use sqlx::postgres::PgPoolOptions;

use crate::errors::RepositoryError;

/// Opens a connection pool against the given database URL.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<sqlx::PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Decodes a stored role column.
pub(crate) fn decode_role(value: &str) -> Result<Role, RepositoryError> {
    Role::parse(value).ok_or_else(|| RepositoryError::InvalidRole(value.to_string()))
}

/// Decodes a stored notification type column.
pub(crate) fn decode_kind(value: &str) -> Result<NotificationKind, RepositoryError> {
    NotificationKind::parse(value)
        .ok_or_else(|| RepositoryError::InvalidNotificationKind(value.to_string()))
}
