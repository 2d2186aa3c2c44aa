//! List Posts Use Case
//!
//! Public: no session required.

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    /// All posts, newest first by creation time
    pub async fn execute(&self) -> PostResult<Vec<Post>> {
        let posts = self.post_repo.list_newest_first().await?;

        tracing::debug!(count = posts.len(), "Listed posts");

        Ok(posts)
    }
}
