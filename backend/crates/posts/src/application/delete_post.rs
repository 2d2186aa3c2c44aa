//! Delete Post Use Case
//!
//! Guarded and ownership-checked, same as update.

use std::sync::Arc;

use auth::presentation::middleware::SessionContext;

use crate::domain::repository::PostRepository;
use crate::domain::value_object::PublicId;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, ctx: &SessionContext, id: &str) -> PostResult<()> {
        let public_id = PublicId::parse_str(id).map_err(|_| PostError::PostNotFound)?;

        let post = self
            .post_repo
            .find_by_public_id(&public_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if !post.is_owned_by(&ctx.user_id) {
            return Err(PostError::NotOwner);
        }

        self.post_repo.delete(&post.post_id).await?;

        tracing::info!(
            post_id = %post.public_id,
            deleted_by = %ctx.public_id,
            "Post deleted"
        );

        Ok(())
    }
}
