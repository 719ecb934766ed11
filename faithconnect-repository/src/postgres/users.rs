//! PostgreSQL implementation of the user repository.
//!
//! User rows are written by the excluded registration collaborator; this
//! side resolves profiles, computes directory listings, and applies
//! partial profile updates with `COALESCE` semantics.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use faithconnect_shared::types::{
    FollowerEntry, LeaderEntry, ProfileUpdate, ProfileView, UserId, UserProfile,
};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::UserRepository;
use crate::postgres::decode_role;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    role: String,
    full_name: String,
    profile_photo: Option<String>,
    faith: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_profile(self) -> Result<UserProfile, RepositoryError> {
        Ok(UserProfile {
            id: self.id,
            role: decode_role(&self.role)?,
            full_name: self.full_name,
            profile_photo: self.profile_photo,
            faith: self.faith,
            bio: self.bio,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL-backed user repository.
pub struct PostgresUserRepository {
    pool: sqlx::PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, role, full_name, profile_photo, faith, bio, created_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_profile).transpose()
    }

    async fn get_profile(
        &self,
        id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Option<ProfileView>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct ProfileRow {
            #[sqlx(flatten)]
            user: UserRow,
            followers_count: i64,
            posts_count: i64,
            is_following: bool,
        }

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                u.id, u.role, u.full_name, u.profile_photo, u.faith, u.bio, u.created_at,
                (SELECT COUNT(*) FROM follows f WHERE f.leader_id = u.id) AS followers_count,
                (SELECT COUNT(*) FROM posts p WHERE p.user_id = u.id) AS posts_count,
                EXISTS(
                    SELECT 1 FROM follows f WHERE f.follower_id = $2 AND f.leader_id = u.id
                ) AS is_following
            FROM users u
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .bind(viewer)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            Ok(ProfileView {
                profile: r.user.into_profile()?,
                followers_count: r.followers_count,
                posts_count: r.posts_count,
                is_following: r.is_following,
            })
        })
        .transpose()
    }

    async fn list_leaders(&self, faith: Option<&str>) -> Result<Vec<LeaderEntry>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct LeaderRow {
            id: Uuid,
            full_name: String,
            role: String,
            faith: Option<String>,
            bio: Option<String>,
            profile_photo: Option<String>,
            followers_count: i64,
        }

        let rows = sqlx::query_as::<_, LeaderRow>(
            r#"
            SELECT
                u.id, u.full_name, u.role, u.faith, u.bio, u.profile_photo,
                COUNT(DISTINCT f.follower_id) AS followers_count
            FROM users u
            LEFT JOIN follows f ON u.id = f.leader_id
            WHERE u.role = 'leader' AND ($1::text IS NULL OR u.faith = $1)
            GROUP BY u.id
            ORDER BY followers_count DESC, u.created_at DESC
            "#,
        )
        .bind(faith)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(LeaderEntry {
                    id: r.id,
                    full_name: r.full_name,
                    role: decode_role(&r.role)?,
                    faith: r.faith,
                    bio: r.bio,
                    profile_photo: r.profile_photo,
                    followers_count: r.followers_count,
                })
            })
            .collect()
    }

    async fn list_followers(
        &self,
        leader_id: UserId,
    ) -> Result<Vec<FollowerEntry>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct FollowerRow {
            id: Uuid,
            full_name: String,
            profile_photo: Option<String>,
            faith: Option<String>,
            followed_at: DateTime<Utc>,
        }

        let rows = sqlx::query_as::<_, FollowerRow>(
            r#"
            SELECT u.id, u.full_name, u.profile_photo, u.faith, f.created_at AS followed_at
            FROM follows f
            JOIN users u ON f.follower_id = u.id
            WHERE f.leader_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(leader_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| FollowerEntry {
                id: r.id,
                full_name: r.full_name,
                profile_photo: r.profile_photo,
                faith: r.faith,
                followed_at: r.followed_at,
            })
            .collect())
    }

    async fn update_profile(
        &self,
        id: UserId,
        changes: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET full_name = COALESCE($1, full_name),
                faith = COALESCE($2, faith),
                bio = COALESCE($3, bio),
                profile_photo = COALESCE($4, profile_photo),
                updated_at = now()
            WHERE id = $5
            RETURNING id, role, full_name, profile_photo, faith, bio, created_at
            "#,
        )
        .bind(changes.full_name.as_deref())
        .bind(changes.faith.as_deref())
        .bind(changes.bio.as_deref())
        .bind(changes.profile_photo.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_profile).transpose()
    }
}
