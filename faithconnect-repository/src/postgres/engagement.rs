//! PostgreSQL implementation of the engagement ledger repository.
//!
//! Likes and saves live in separate tables, each with partial unique
//! indexes per (user, post) and (user, reel); comments are append-only.
//! Every row references exactly one of `post_id`/`reel_id`, CHECK-enforced.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use faithconnect_shared::types::{
    Comment, CommentView, EngagementCounts, MarkKind, TargetKind, TargetRef, UserDisplay, UserId,
};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::EngagementRepository;

/// Table holding a mark kind.
fn mark_table(kind: MarkKind) -> &'static str {
    match kind {
        MarkKind::Like => "likes",
        MarkKind::Save => "saves",
    }
}

/// Foreign-key column for a target kind.
fn target_column(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Post => "post_id",
        TargetKind::Reel => "reel_id",
    }
}

/// PostgreSQL-backed engagement ledger.
pub struct PostgresEngagementRepository {
    pool: sqlx::PgPool,
}

impl PostgresEngagementRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngagementRepository for PostgresEngagementRepository {
    async fn insert_mark(
        &self,
        user_id: UserId,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<bool, RepositoryError> {
        let sql = format!(
            "INSERT INTO {} (user_id, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            mark_table(kind),
            target_column(target.kind),
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(target.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_mark(
        &self,
        user_id: UserId,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<bool, RepositoryError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = $1 AND {} = $2",
            mark_table(kind),
            target_column(target.kind),
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(target.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_comment(
        &self,
        author_id: UserId,
        target: TargetRef,
        content: &str,
    ) -> Result<Comment, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct InsertedRow {
            id: Uuid,
            created_at: DateTime<Utc>,
        }

        let sql = format!(
            "INSERT INTO comments (user_id, {}, content) VALUES ($1, $2, $3) \
             RETURNING id, created_at",
            target_column(target.kind),
        );
        let row = sqlx::query_as::<_, InsertedRow>(&sql)
            .bind(author_id)
            .bind(target.id)
            .bind(content)
            .fetch_one(&self.pool)
            .await?;

        Ok(Comment {
            id: row.id,
            author_id,
            target,
            content: content.to_string(),
            created_at: row.created_at,
        })
    }

    async fn list_comments(
        &self,
        target: TargetRef,
    ) -> Result<Vec<CommentView>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct CommentRow {
            id: Uuid,
            content: String,
            created_at: DateTime<Utc>,
            author_id: Uuid,
            author_name: String,
            author_photo: Option<String>,
        }

        let sql = format!(
            r#"
            SELECT
                c.id, c.content, c.created_at,
                u.id AS author_id, u.full_name AS author_name, u.profile_photo AS author_photo
            FROM comments c
            JOIN users u ON c.user_id = u.id
            WHERE c.{} = $1
            ORDER BY c.created_at DESC
            "#,
            target_column(target.kind),
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(target.id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| CommentView {
                id: r.id,
                content: r.content,
                created_at: r.created_at,
                author: UserDisplay {
                    id: r.author_id,
                    name: r.author_name,
                    photo: r.author_photo,
                },
            })
            .collect())
    }

    async fn counts(&self, target: TargetRef) -> Result<EngagementCounts, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct CountsRow {
            likes: i64,
            comments: i64,
        }

        let column = target_column(target.kind);
        let sql = format!(
            "SELECT \
               (SELECT COUNT(*) FROM likes WHERE {column} = $1) AS likes, \
               (SELECT COUNT(*) FROM comments WHERE {column} = $1) AS comments",
        );
        let row = sqlx::query_as::<_, CountsRow>(&sql)
            .bind(target.id)
            .fetch_one(&self.pool)
            .await?;

        Ok(EngagementCounts {
            likes: row.likes,
            comments: row.comments,
        })
    }
}
