//! Create Post Use Case
//!
//! Requires the session guard to have passed; the caller identity arrives
//! as an explicit [`SessionContext`].

use std::sync::Arc;

use auth::presentation::middleware::SessionContext;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    /// Optional display author; defaults to the session user name
    pub author: Option<String>,
    pub excerpt: String,
    pub content: String,
    /// Optional image; defaults to empty
    pub image_url: Option<String>,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, ctx: &SessionContext, input: CreatePostInput) -> PostResult<Post> {
        if input.title.trim().is_empty()
            || input.excerpt.trim().is_empty()
            || input.content.trim().is_empty()
        {
            return Err(PostError::Validation(
                "Please fill in all the required fields: title, excerpt, content".to_string(),
            ));
        }

        let author = match input.author {
            Some(author) if !author.trim().is_empty() => author,
            _ => ctx.user_name.clone(),
        };

        let post = Post::new(
            input.title,
            author,
            input.excerpt,
            input.content,
            input.image_url.unwrap_or_default(),
            ctx.user_id,
            ctx.public_id,
        );

        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.public_id,
            created_by = %ctx.public_id,
            "Post created"
        );

        Ok(post)
    }
}
