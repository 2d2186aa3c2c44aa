//! Sign Up Use Case
//!
//! Creates a new user account and logs it in immediately.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::{credentials::Credentials, session::Session, user::User};
use crate::domain::repository::{CredentialsRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult, is_unique_violation};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    /// Optional email; defaulted when absent or empty
    pub email: Option<String>,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// Session token for cookie (auto-login)
    pub session_token: String,
    pub public_id: String,
    pub user_name: String,
    pub is_admin: bool,
}

/// Sign up use case
pub struct SignUpUseCase<U, C, S>
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

impl<U, C, S> SignUpUseCase<U, C, S>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate user name
        let user_name = UserName::new(&input.user_name)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Validate email, or default it from the user name
        let email = match input.email.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                Email::new(raw).map_err(|e| AuthError::Validation(e.message().to_string()))?
            }
            _ => Email::default_for(user_name.as_str()),
        };

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Fast-path existence check. The canonical-name unique index is the
        // authoritative guard; a concurrent duplicate that slips past this
        // check fails the insert below.
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        // Create user
        let user = User::new(user_name, email);

        // Create auth credentials
        let credentials = Credentials::new(user.user_id, password_hash);

        // Persist
        if let Err(e) = self.user_repo.create(&user).await {
            return Err(match e {
                AuthError::Database(db) if is_unique_violation(&db) => AuthError::UserNameTaken,
                other => other,
            });
        }
        self.credentials_repo.create(&credentials).await?;

        // Auto-login: create a session right away. The insert must complete
        // before the response carrying the cookie is produced.
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
            user_name = %user.user_name,
            session_id = %session.session_id,
            "User signed up"
        );

        Ok(SignUpOutput {
            session_token,
            public_id: user.public_id.to_string(),
            user_name: user.user_name.to_string(),
            is_admin: user.is_admin,
        })
    }
}
