//! Update Post Use Case
//!
//! Guarded and ownership-checked: only the creating user may edit a post.

use std::sync::Arc;

use auth::presentation::middleware::SessionContext;

use crate::domain::entity::post::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::PublicId;
use crate::error::{PostError, PostResult};

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(
        &self,
        ctx: &SessionContext,
        id: &str,
        changes: PostChanges,
    ) -> PostResult<Post> {
        let public_id = PublicId::parse_str(id).map_err(|_| PostError::PostNotFound)?;

        let mut post = self
            .post_repo
            .find_by_public_id(&public_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        // Ownership check runs after the coarse session guard
        if !post.is_owned_by(&ctx.user_id) {
            return Err(PostError::NotOwner);
        }

        post.apply_changes(changes);

        self.post_repo.update(&post).await?;

        tracing::info!(
            post_id = %post.public_id,
            updated_by = %ctx.public_id,
            "Post updated"
        );

        Ok(post)
    }
}
