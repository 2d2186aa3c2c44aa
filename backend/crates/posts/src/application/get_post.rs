//! Get Post Use Case
//!
//! Public: no session required.

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::PublicId;
use crate::error::{PostError, PostResult};

/// Get post use case
pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: &str) -> PostResult<Post> {
        // A malformed id cannot name an existing post
        let public_id = PublicId::parse_str(id).map_err(|_| PostError::PostNotFound)?;

        self.post_repo
            .find_by_public_id(&public_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }
}
