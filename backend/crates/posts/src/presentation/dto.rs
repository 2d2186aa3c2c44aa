//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::{Post, PostChanges};

// ============================================================================
// Post
// ============================================================================

/// Post as rendered to clients
///
/// `id` and `createdBy` are public ids; internal UUIDs never leave the
/// server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.public_id.to_string(),
            title: post.title.clone(),
            author: post.author.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            created_by: post.created_by_public.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

// ============================================================================
// Create
// ============================================================================

/// Create post request
///
/// Required fields default to empty strings so that "absent" and "empty"
/// both surface as the same 400 validation error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    pub author: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub image_url: Option<String>,
}

/// Create post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub message: String,
    pub post: PostResponse,
}

// ============================================================================
// Update
// ============================================================================

/// Update post request (partial)
///
/// Absent fields are left unchanged. An explicitly empty `imageUrl` clears
/// the image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            excerpt: req.excerpt,
            content: req.content,
            image_url: req.image_url,
        }
    }
}

/// Update post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostResponse {
    pub message: String,
    pub post: PostResponse,
}

// ============================================================================
// Delete
// ============================================================================

/// Delete post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostResponse {
    pub message: String,
    pub post_id: String,
}
