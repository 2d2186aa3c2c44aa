//! Posts Backend Module
//!
//! Blog post CRUD behind the auth crate's session guard.
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, partial-update rules, repository trait
//! - `application/` - One use case per operation
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Reads (list, get) are public
//! - Mutations require a live session (guard middleware)
//! - Update and delete additionally require ownership

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPostRepository as PostStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
