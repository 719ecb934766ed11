//! PostgreSQL implementation of the message repository.
//!
//! The conversation view is derived with `DISTINCT ON` over the union of
//! sent and received messages; it is never stored. Threads are fetched
//! newest-first so limit/offset paginates from the end of the thread.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use faithconnect_shared::types::{
    ConversationSummary, Message, MessageView, Page, UserDisplay, UserId,
};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::MessageRepository;
use crate::postgres::decode_role;

/// PostgreSQL-backed message store.
pub struct PostgresMessageRepository {
    pool: sqlx::PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn insert(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: &str,
    ) -> Result<Message, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct InsertedRow {
            id: Uuid,
            is_read: bool,
            created_at: DateTime<Utc>,
        }

        let row = sqlx::query_as::<_, InsertedRow>(
            "INSERT INTO messages (sender_id, receiver_id, content) \
             VALUES ($1, $2, $3) RETURNING id, is_read, created_at",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(Message {
            id: row.id,
            sender_id,
            receiver_id,
            content: content.to_string(),
            is_read: row.is_read,
            created_at: row.created_at,
        })
    }

    async fn conversations(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ConversationSummary>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct ConversationRow {
            other_user_id: Uuid,
            counterpart_name: String,
            counterpart_photo: Option<String>,
            counterpart_role: String,
            last_message: String,
            last_message_time: DateTime<Utc>,
            unread_count: i64,
        }

        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT * FROM (
                SELECT DISTINCT ON (other_user_id)
                    other_user_id,
                    u.full_name AS counterpart_name,
                    u.profile_photo AS counterpart_photo,
                    u.role AS counterpart_role,
                    last_message,
                    last_message_time,
                    unread_count
                FROM (
                    SELECT
                        CASE WHEN m.sender_id = $1 THEN m.receiver_id ELSE m.sender_id END
                            AS other_user_id,
                        m.content AS last_message,
                        m.created_at AS last_message_time,
                        (SELECT COUNT(*) FROM messages m2
                         WHERE m2.sender_id =
                               CASE WHEN m.sender_id = $1 THEN m.receiver_id ELSE m.sender_id END
                           AND m2.receiver_id = $1
                           AND m2.is_read = false) AS unread_count
                    FROM messages m
                    WHERE m.sender_id = $1 OR m.receiver_id = $1
                    ORDER BY m.created_at DESC
                ) threads
                JOIN users u ON threads.other_user_id = u.id
                ORDER BY other_user_id, last_message_time DESC
            ) conversations
            ORDER BY last_message_time DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(ConversationSummary {
                    counterpart: UserDisplay {
                        id: r.other_user_id,
                        name: r.counterpart_name,
                        photo: r.counterpart_photo,
                    },
                    counterpart_role: decode_role(&r.counterpart_role)?,
                    last_message: r.last_message,
                    last_message_time: r.last_message_time,
                    unread_count: r.unread_count,
                })
            })
            .collect()
    }

    async fn thread(
        &self,
        user_id: UserId,
        counterpart_id: UserId,
        page: Page,
    ) -> Result<Vec<MessageView>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct ThreadRow {
            id: Uuid,
            sender_id: Uuid,
            receiver_id: Uuid,
            content: String,
            is_read: bool,
            created_at: DateTime<Utc>,
            sender_name: String,
            sender_photo: Option<String>,
            receiver_name: String,
            receiver_photo: Option<String>,
        }

        let rows = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT
                m.id, m.sender_id, m.receiver_id, m.content, m.is_read, m.created_at,
                s.full_name AS sender_name, s.profile_photo AS sender_photo,
                r.full_name AS receiver_name, r.profile_photo AS receiver_photo
            FROM messages m
            JOIN users s ON m.sender_id = s.id
            JOIN users r ON m.receiver_id = r.id
            WHERE (m.sender_id = $1 AND m.receiver_id = $2)
               OR (m.sender_id = $2 AND m.receiver_id = $1)
            ORDER BY m.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(user_id)
        .bind(counterpart_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MessageView {
                id: r.id,
                content: r.content,
                is_read: r.is_read,
                created_at: r.created_at,
                is_mine: r.sender_id == user_id,
                sender: UserDisplay {
                    id: r.sender_id,
                    name: r.sender_name,
                    photo: r.sender_photo,
                },
                receiver: UserDisplay {
                    id: r.receiver_id,
                    name: r.receiver_name,
                    photo: r.receiver_photo,
                },
            })
            .collect())
    }

    async fn mark_thread_read(
        &self,
        receiver_id: UserId,
        sender_id: UserId,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = true \
             WHERE receiver_id = $1 AND sender_id = $2 AND is_read = false",
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn mark_read(&self, id: Uuid, receiver_id: UserId) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("UPDATE messages SET is_read = true WHERE id = $1 AND receiver_id = $2")
                .bind(id)
                .bind(receiver_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
