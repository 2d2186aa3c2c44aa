//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostId, PublicId, UserId};
use crate::error::{PostError, PostResult};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                public_id,
                title,
                author,
                excerpt,
                content,
                image_url,
                created_by,
                created_by_public,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.public_id.as_str())
        .bind(&post.title)
        .bind(&post.author)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.created_by.as_uuid())
        .bind(post.created_by_public.as_str())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                public_id,
                title,
                author,
                excerpt,
                content,
                image_url,
                created_by,
                created_by_public,
                created_at,
                updated_at
            FROM posts
            WHERE public_id = $1
            "#,
        )
        .bind(public_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_post()).transpose()
    }

    async fn list_newest_first(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                public_id,
                title,
                author,
                excerpt,
                content,
                image_url,
                created_by,
                created_by_public,
                created_at,
                updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post()).collect()
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        // created_by / created_by_public are immutable and never updated
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                author = $3,
                excerpt = $4,
                content = $5,
                image_url = $6,
                updated_at = $7
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.author)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    public_id: String,
    title: String,
    author: String,
    excerpt: String,
    content: String,
    image_url: String,
    created_by: Uuid,
    created_by_public: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl PostRow {
    fn into_post(self) -> PostResult<Post> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| PostError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        let created_by_public = PublicId::from_nanoid(
            Nanoid::from_str(&self.created_by_public)
                .map_err(|e| PostError::Internal(format!("Invalid created_by_public: {}", e)))?,
        );

        Ok(Post {
            post_id: PostId::from_uuid(self.post_id),
            public_id,
            title: self.title,
            author: self.author,
            excerpt: self.excerpt,
            content: self.content,
            image_url: self.image_url,
            created_by: UserId::from_uuid(self.created_by),
            created_by_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
