//! Session Entity
//!
//! Represents an authenticated user session.
//! Stored in database with cookie-based token reference; the identity
//! attributes are a snapshot taken at login and are not re-validated
//! against the users table per request.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::{public_id::PublicId, user_id::UserId, user_name::UserName};

/// Auth session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// Public ID for API responses
    pub public_id: PublicId,
    /// User name at session creation
    pub user_name: UserName,
    /// Admin flag at session creation
    pub is_admin: bool,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(
        user_id: UserId,
        public_id: PublicId,
        user_name: UserName,
        is_admin: bool,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            public_id,
            user_name,
            is_admin,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session(ttl: Duration) -> Session {
        Session::new(
            UserId::new(),
            PublicId::new(),
            UserName::new("alice").unwrap(),
            false,
            ttl,
        )
    }

    #[test]
    fn test_fresh_session_not_expired() {
        let session = sample_session(Duration::hours(24));
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_negative_ttl_expired() {
        let session = sample_session(Duration::seconds(-1));
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }

    #[test]
    fn test_touch_advances_activity() {
        let mut session = sample_session(Duration::hours(24));
        let before = session.last_activity_at;
        session.touch();
        assert!(session.last_activity_at >= before);
    }
}
