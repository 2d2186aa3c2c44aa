//! Unit tests for the auth crate
//!
//! Use-case level tests run against in-memory repository implementations,
//! so the session/credential invariants are covered without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::entity::{credentials::Credentials, session::Session, user::User};
use crate::domain::repository::{CredentialsRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{public_id::PublicId, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
pub(crate) struct MemoryAuthRepo {
    users: Arc<Mutex<Vec<User>>>,
    credentials: Arc<Mutex<Vec<Credentials>>>,
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl MemoryAuthRepo {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub(crate) fn insert_session(&self, session: Session) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session);
    }
}

impl UserRepository for MemoryAuthRepo {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        // Unique index on the canonical name
        if users
            .iter()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(AuthError::UserNameTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.public_id == *public_id)
            .cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.user_name.canonical() == user_name.canonical()))
    }
}

impl CredentialsRepository for MemoryAuthRepo {
    async fn create(&self, credentials: &Credentials) -> AuthResult<()> {
        self.credentials.lock().unwrap().push(credentials.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credentials>> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == *user_id)
            .cloned())
    }
}

impl SessionRepository for MemoryAuthRepo {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(&session_id).cloned())
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Test helpers
// ============================================================================

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

fn sign_up_use_case(
    repo: &MemoryAuthRepo,
    config: &Arc<AuthConfig>,
) -> SignUpUseCase<MemoryAuthRepo, MemoryAuthRepo, MemoryAuthRepo> {
    let repo = Arc::new(repo.clone());
    SignUpUseCase::new(repo.clone(), repo.clone(), repo, config.clone())
}

fn sign_in_use_case(
    repo: &MemoryAuthRepo,
    config: &Arc<AuthConfig>,
) -> SignInUseCase<MemoryAuthRepo, MemoryAuthRepo, MemoryAuthRepo> {
    let repo = Arc::new(repo.clone());
    SignInUseCase::new(repo.clone(), repo.clone(), repo, config.clone())
}

fn signup_input(username: &str, password: &str) -> SignUpInput {
    SignUpInput {
        user_name: username.to_string(),
        password: password.to_string(),
        email: None,
    }
}

// ============================================================================
// Sign up
// ============================================================================

mod sign_up_tests {
    use super::*;

    #[tokio::test]
    async fn test_signup_creates_user_and_session() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        let output = sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        assert_eq!(output.user_name, "alice");
        assert!(!output.is_admin);
        assert!(!output.session_token.is_empty());

        // Auto-login: the session row is durable before the use case returns
        assert_eq!(repo.session_count(), 1);

        // The returned token resolves to the stored session
        let check = CheckSessionUseCase::new(Arc::new(repo.clone()), config.clone());
        let info = check.execute(&output.session_token).await.unwrap();
        assert_eq!(info.user_name, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_signup_conflict() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        let err = sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "other-pw"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_duplicate_signup_case_insensitive() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        // "Alice" collides with "alice" on the canonical uniqueness key
        let err = sign_up_use_case(&repo, &config)
            .execute(signup_input("Alice", "pw123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_signup_missing_fields_rejected() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        let err = sign_up_use_case(&repo, &config)
            .execute(signup_input("", "pw123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        let err = sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        // Nothing persisted on validation failure
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_signup_email_defaulted() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        let name = UserName::new("alice").unwrap();
        let user = repo.find_by_user_name(&name).await.unwrap().unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_signup_invalid_email_rejected() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        let err = sign_up_use_case(&repo, &config)
            .execute(SignUpInput {
                user_name: "alice".to_string(),
                password: "pw123".to_string(),
                email: Some("not-an-email".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
    }
}

// ============================================================================
// Sign in
// ============================================================================

mod sign_in_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_after_signup() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        let output = sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        // The session created by login is immediately usable
        let check = CheckSessionUseCase::new(Arc::new(repo.clone()), config.clone());
        assert!(check.is_valid(&output.session_token).await);
    }

    #[tokio::test]
    async fn test_enumeration_resistance() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        // Wrong password for a known user
        let wrong_password = sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        // Unknown user entirely
        let unknown_user = sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "nobody".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        // Identical message for both failure modes
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_failed_login_creates_no_session() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();
        let sessions_after_signup = repo.session_count();

        let _ = sign_in_use_case(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(repo.session_count(), sessions_after_signup);
    }
}

// ============================================================================
// Sign out / session checks
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        let output = sign_up_use_case(&repo, &config)
            .execute(signup_input("alice", "pw123"))
            .await
            .unwrap();

        let session_repo = Arc::new(repo.clone());
        let sign_out = SignOutUseCase::new(session_repo.clone(), config.clone());
        sign_out.execute(&output.session_token).await.unwrap();

        let check = CheckSessionUseCase::new(session_repo.clone(), config.clone());
        assert!(!check.is_valid(&output.session_token).await);

        // Idempotent: second logout of the same token is not an error
        sign_out.execute(&output.session_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_invalid_and_removed() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        let session = Session::new(
            UserId::new(),
            PublicId::new(),
            UserName::new("alice").unwrap(),
            false,
            chrono::Duration::seconds(-10),
        );
        let token = crate::application::token::sign_session_token(
            &config.session_secret,
            session.session_id,
        );
        repo.insert_session(session);

        let check = CheckSessionUseCase::new(Arc::new(repo.clone()), config.clone());
        assert!(!check.is_valid(&token).await);

        // Expired row is deleted on access
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_garbage_token_invalid() {
        let repo = MemoryAuthRepo::new();
        let config = test_config();

        let check = CheckSessionUseCase::new(Arc::new(repo.clone()), config.clone());
        assert!(!check.is_valid("garbage").await);
        assert!(!check.is_valid("").await);
    }

    #[tokio::test]
    async fn test_cleanup_expired_sweeps_only_dead_sessions() {
        let repo = MemoryAuthRepo::new();

        let live = Session::new(
            UserId::new(),
            PublicId::new(),
            UserName::new("alice").unwrap(),
            false,
            chrono::Duration::hours(24),
        );
        let dead = Session::new(
            UserId::new(),
            PublicId::new(),
            UserName::new("bob").unwrap(),
            false,
            chrono::Duration::seconds(-10),
        );
        repo.insert_session(live);
        repo.insert_session(dead);

        let swept = SessionRepository::cleanup_expired(&repo).await.unwrap();
        assert_eq!(swept, 1);
        assert_eq!(repo.session_count(), 1);
    }
}
