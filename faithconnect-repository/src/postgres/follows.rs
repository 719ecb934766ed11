//! PostgreSQL implementation of the follow graph repository.
//!
//! The `follows_unique_edge` constraint is the final arbiter against
//! concurrent duplicate follows: the insert uses `ON CONFLICT DO NOTHING`
//! and the affected row count tells the caller whether the edge was new.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use faithconnect_shared::types::{FollowedLeader, UserId};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::FollowRepository;
use crate::postgres::decode_role;

/// PostgreSQL-backed follow graph.
pub struct PostgresFollowRepository {
    pool: sqlx::PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn insert(
        &self,
        follower_id: UserId,
        leader_id: UserId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO follows (follower_id, leader_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(follower_id)
        .bind(leader_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(
        &self,
        follower_id: UserId,
        leader_id: UserId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND leader_id = $2")
            .bind(follower_id)
            .bind(leader_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(
        &self,
        follower_id: UserId,
        leader_id: UserId,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND leader_id = $2)",
        )
        .bind(follower_id)
        .bind(leader_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list_leaders(
        &self,
        follower_id: UserId,
    ) -> Result<Vec<FollowedLeader>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct FollowedLeaderRow {
            id: Uuid,
            full_name: String,
            profile_photo: Option<String>,
            role: String,
            faith: Option<String>,
            bio: Option<String>,
            followed_at: DateTime<Utc>,
            posts_count: i64,
        }

        let rows = sqlx::query_as::<_, FollowedLeaderRow>(
            r#"
            SELECT
                u.id, u.full_name, u.profile_photo, u.role, u.faith, u.bio,
                f.created_at AS followed_at,
                (SELECT COUNT(*) FROM posts p WHERE p.user_id = u.id) AS posts_count
            FROM follows f
            JOIN users u ON f.leader_id = u.id
            WHERE f.follower_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(FollowedLeader {
                    id: r.id,
                    full_name: r.full_name,
                    profile_photo: r.profile_photo,
                    role: decode_role(&r.role)?,
                    faith: r.faith,
                    bio: r.bio,
                    followed_at: r.followed_at,
                    posts_count: r.posts_count,
                })
            })
            .collect()
    }
}
