//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{CredentialsRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// User name
    pub user_name: String,
    /// Password
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub public_id: String,
    pub user_name: String,
    pub is_admin: bool,
}

/// Sign in use case
pub struct SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialsRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    credentials_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialsRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credentials_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credentials_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Unknown user, malformed user name and wrong password all collapse
        // into the same InvalidCredentials response (enumeration resistance).
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Get auth credentials
        let credentials = self
            .credentials_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or(AuthError::Internal("Credentials not found".to_string()))?;

        // Verify password
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !credentials
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        // Create session. The insert must complete before the response
        // carrying the cookie is produced.
        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(
            user.user_id,
            user.public_id,
            user.user_name.clone(),
            user.is_admin,
            ttl,
        );

        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            public_id: user.public_id.to_string(),
            user_name: user.user_name.to_string(),
            is_admin: user.is_admin,
        })
    }
}
