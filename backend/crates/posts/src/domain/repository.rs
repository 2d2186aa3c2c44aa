//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::post::Post;
use crate::domain::value_object::{PostId, PublicId};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by public ID
    async fn find_by_public_id(&self, public_id: &PublicId) -> PostResult<Option<Post>>;

    /// List all posts, newest first by creation time
    async fn list_newest_first(&self) -> PostResult<Vec<Post>>;

    /// Update a post
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Delete a post
    async fn delete(&self, post_id: &PostId) -> PostResult<()>;
}
