//! PostgreSQL implementation of the content repository.
//!
//! Feed queries enrich each row with author display fields, live
//! like/comment counts, and viewer-specific `is_liked`/`is_saved` flags.
//! Counts are always computed with subqueries; no stored counters exist.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use faithconnect_shared::types::{
    ContentAuthor, NewPost, Page, Post, PostView, Reel, ReelView, TargetKind, TargetRef, UserId,
};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::ContentRepository;
use crate::postgres::decode_role;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    caption: Option<String>,
    media_url: Option<String>,
    media_type: Option<String>,
    created_at: DateTime<Utc>,
    likes_count: i64,
    comments_count: i64,
    is_liked: bool,
    is_saved: bool,
    author_id: Uuid,
    author_name: String,
    author_photo: Option<String>,
    author_role: String,
    author_faith: Option<String>,
}

impl PostRow {
    fn into_view(self) -> Result<PostView, RepositoryError> {
        Ok(PostView {
            id: self.id,
            caption: self.caption,
            media_url: self.media_url,
            media_type: self.media_type,
            created_at: self.created_at,
            likes_count: self.likes_count,
            comments_count: self.comments_count,
            is_liked: self.is_liked,
            is_saved: self.is_saved,
            author: ContentAuthor {
                id: self.author_id,
                name: self.author_name,
                photo: self.author_photo,
                role: decode_role(&self.author_role)?,
                faith: self.author_faith,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
struct ReelRow {
    id: Uuid,
    caption: Option<String>,
    video_url: String,
    created_at: DateTime<Utc>,
    likes_count: i64,
    comments_count: i64,
    is_liked: bool,
    is_saved: bool,
    author_id: Uuid,
    author_name: String,
    author_photo: Option<String>,
    author_role: String,
    author_faith: Option<String>,
}

impl ReelRow {
    fn into_view(self) -> Result<ReelView, RepositoryError> {
        Ok(ReelView {
            id: self.id,
            caption: self.caption,
            video_url: self.video_url,
            created_at: self.created_at,
            likes_count: self.likes_count,
            comments_count: self.comments_count,
            is_liked: self.is_liked,
            is_saved: self.is_saved,
            author: ContentAuthor {
                id: self.author_id,
                name: self.author_name,
                photo: self.author_photo,
                role: decode_role(&self.author_role)?,
                faith: self.author_faith,
            },
        })
    }
}

/// The enriched selection shared by every post feed query. `$1` is the
/// (possibly null) viewer.
const POST_VIEW_SELECT: &str = r#"
    SELECT
        p.id, p.caption, p.media_url, p.media_type, p.created_at,
        (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS likes_count,
        (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comments_count,
        EXISTS(SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1) AS is_liked,
        EXISTS(SELECT 1 FROM saves s WHERE s.post_id = p.id AND s.user_id = $1) AS is_saved,
        u.id AS author_id, u.full_name AS author_name, u.profile_photo AS author_photo,
        u.role AS author_role, u.faith AS author_faith
    FROM posts p
    JOIN users u ON p.user_id = u.id
"#;

const REEL_VIEW_SELECT: &str = r#"
    SELECT
        r.id, r.caption, r.video_url, r.created_at,
        (SELECT COUNT(*) FROM likes l WHERE l.reel_id = r.id) AS likes_count,
        (SELECT COUNT(*) FROM comments c WHERE c.reel_id = r.id) AS comments_count,
        EXISTS(SELECT 1 FROM likes l WHERE l.reel_id = r.id AND l.user_id = $1) AS is_liked,
        EXISTS(SELECT 1 FROM saves s WHERE s.reel_id = r.id AND s.user_id = $1) AS is_saved,
        u.id AS author_id, u.full_name AS author_name, u.profile_photo AS author_photo,
        u.role AS author_role, u.faith AS author_faith
    FROM reels r
    JOIN users u ON r.user_id = u.id
"#;

/// PostgreSQL-backed content store.
pub struct PostgresContentRepository {
    pool: sqlx::PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn insert_post(
        &self,
        author_id: UserId,
        post: &NewPost,
    ) -> Result<Post, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct InsertedRow {
            id: Uuid,
            created_at: DateTime<Utc>,
        }

        let row = sqlx::query_as::<_, InsertedRow>(
            "INSERT INTO posts (user_id, caption, media_url, media_type) \
             VALUES ($1, $2, $3, $4) RETURNING id, created_at",
        )
        .bind(author_id)
        .bind(post.caption.as_deref())
        .bind(post.media_url.as_deref())
        .bind(post.media_type.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(Post {
            id: row.id,
            author_id,
            caption: post.caption.clone(),
            media_url: post.media_url.clone(),
            media_type: post.media_type.clone(),
            created_at: row.created_at,
        })
    }

    async fn insert_reel(
        &self,
        author_id: UserId,
        caption: Option<&str>,
        video_url: &str,
    ) -> Result<Reel, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct InsertedRow {
            id: Uuid,
            created_at: DateTime<Utc>,
        }

        let row = sqlx::query_as::<_, InsertedRow>(
            "INSERT INTO reels (user_id, caption, video_url) \
             VALUES ($1, $2, $3) RETURNING id, created_at",
        )
        .bind(author_id)
        .bind(caption)
        .bind(video_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(Reel {
            id: row.id,
            author_id,
            caption: caption.map(str::to_string),
            video_url: video_url.to_string(),
            created_at: row.created_at,
        })
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn owner_of(&self, target: TargetRef) -> Result<Option<UserId>, RepositoryError> {
        let sql = match target.kind {
            TargetKind::Post => "SELECT user_id FROM posts WHERE id = $1",
            TargetKind::Reel => "SELECT user_id FROM reels WHERE id = $1",
        };
        let owner = sqlx::query_scalar::<_, Uuid>(sql)
            .bind(target.id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }

    async fn explore_posts(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError> {
        let sql = format!("{POST_VIEW_SELECT} ORDER BY p.created_at DESC LIMIT $2 OFFSET $3");
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(viewer)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PostRow::into_view).collect()
    }

    async fn following_posts(
        &self,
        follower_id: UserId,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError> {
        let sql = format!(
            "{POST_VIEW_SELECT} \
             JOIN follows f ON p.user_id = f.leader_id \
             WHERE f.follower_id = $1 \
             ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(follower_id)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PostRow::into_view).collect()
    }

    async fn user_posts(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError> {
        let sql = format!(
            "{POST_VIEW_SELECT} WHERE p.user_id = $2 \
             ORDER BY p.created_at DESC LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(viewer)
            .bind(user_id)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PostRow::into_view).collect()
    }

    async fn list_reels(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<ReelView>, RepositoryError> {
        let sql = format!("{REEL_VIEW_SELECT} ORDER BY r.created_at DESC LIMIT $2 OFFSET $3");
        let rows = sqlx::query_as::<_, ReelRow>(&sql)
            .bind(viewer)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ReelRow::into_view).collect()
    }

    async fn user_reels(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Vec<ReelView>, RepositoryError> {
        let sql = format!("{REEL_VIEW_SELECT} WHERE r.user_id = $2 ORDER BY r.created_at DESC");
        let rows = sqlx::query_as::<_, ReelRow>(&sql)
            .bind(viewer)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ReelRow::into_view).collect()
    }
}
