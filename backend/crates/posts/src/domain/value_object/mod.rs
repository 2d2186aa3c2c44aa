//! Value Objects

pub mod post_id;

// Re-exports
pub use post_id::PostId;

// Shared identity value objects come from the auth domain
pub use auth::domain::value_object::{public_id::PublicId, user_id::UserId};
