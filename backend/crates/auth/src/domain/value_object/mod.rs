//! Value Objects

pub mod email;
pub mod public_id;
pub mod user_id;
pub mod user_name;
pub mod user_password;

// Re-exports
pub use email::Email;
pub use public_id::PublicId;
pub use user_id::UserId;
pub use user_name::UserName;
pub use user_password::{RawPassword, UserPassword};
