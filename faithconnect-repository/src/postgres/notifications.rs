//! PostgreSQL implementation of the notification repository.
//!
//! Follower fan-out is one `INSERT ... SELECT` over the `follows` table,
//! so broadcast cost scales with follower count in a single statement.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use faithconnect_shared::types::{
    FanOutNotification, NewNotification, NotificationView, Page, UserDisplay, UserId,
};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::NotificationRepository;
use crate::postgres::decode_kind;

/// PostgreSQL-backed notification store.
pub struct PostgresNotificationRepository {
    pool: sqlx::PgPool,
}

impl PostgresNotificationRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn insert(&self, notification: &NewNotification) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO notifications \
             (user_id, type, content, related_user_id, related_post_id, related_reel_id) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(notification.recipient_id)
        .bind(notification.kind.as_str())
        .bind(&notification.content)
        .bind(notification.related_user_id)
        .bind(notification.related_post_id)
        .bind(notification.related_reel_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_for_followers(
        &self,
        leader_id: UserId,
        notification: &FanOutNotification,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO notifications
                (user_id, type, content, related_user_id, related_post_id, related_reel_id)
            SELECT f.follower_id, $2, $3, $1, $4, $5
            FROM follows f
            WHERE f.leader_id = $1
            "#,
        )
        .bind(leader_id)
        .bind(notification.kind.as_str())
        .bind(&notification.content)
        .bind(notification.related_post_id)
        .bind(notification.related_reel_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn list(
        &self,
        user_id: UserId,
        page: Page,
    ) -> Result<Vec<NotificationView>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct NotificationRow {
            id: Uuid,
            kind: String,
            content: String,
            is_read: bool,
            created_at: DateTime<Utc>,
            related_user_id: Option<Uuid>,
            related_user_name: Option<String>,
            related_user_photo: Option<String>,
            related_post_id: Option<Uuid>,
            related_reel_id: Option<Uuid>,
        }

        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT
                n.id, n.type AS kind, n.content, n.is_read, n.created_at,
                n.related_user_id,
                u.full_name AS related_user_name,
                u.profile_photo AS related_user_photo,
                n.related_post_id, n.related_reel_id
            FROM notifications n
            LEFT JOIN users u ON n.related_user_id = u.id
            WHERE n.user_id = $1
            ORDER BY n.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                let related_user = match (r.related_user_id, r.related_user_name) {
                    (Some(id), Some(name)) => Some(UserDisplay {
                        id,
                        name,
                        photo: r.related_user_photo,
                    }),
                    _ => None,
                };
                Ok(NotificationView {
                    id: r.id,
                    kind: decode_kind(&r.kind)?,
                    content: r.content,
                    is_read: r.is_read,
                    created_at: r.created_at,
                    related_user,
                    related_post_id: r.related_post_id,
                    related_reel_id: r.related_reel_id,
                })
            })
            .collect()
    }

    async fn mark_read(&self, id: Uuid, user_id: UserId) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = true WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn unread_count(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
