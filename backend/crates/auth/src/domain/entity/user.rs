//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, public_id::PublicId, user_id::UserId, user_name::UserName,
};

/// User entity
///
/// Contains public user profile information.
/// Sensitive auth data is in the Credentials entity.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Email address (defaulted at signup when not provided)
    pub email: Email,
    /// Admin flag (default false)
    pub is_admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, email: Email) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            user_name,
            email,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let name = UserName::new("alice").unwrap();
        let email = Email::default_for(name.as_str());
        let user = User::new(name, email);

        assert!(!user.is_admin);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.email.as_str(), "alice@example.com");
    }
}
