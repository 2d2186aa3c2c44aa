//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::{CredentialsRepository, SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthCheckResponse, LoginRequest, LoginResponse, LogoutResponse, SignUpRequest, SignUpResponse,
    UserSummary,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + CredentialsRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialsRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = SignUpInput {
        user_name: req.username,
        password: req.password,
        email: req.email,
    };

    // The use case persists the session before returning, so the cookie in
    // this response always references a durable session row.
    let output = use_case.execute(input).await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(SignUpResponse {
            message: "User created and logged in successfully.".to_string(),
            user: UserSummary {
                id: output.public_id,
                username: output.user_name,
                is_admin: output.is_admin,
            },
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialsRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login Successful".to_string(),
            user: UserSummary {
                id: output.public_id,
                username: output.user_name,
                is_admin: output.is_admin,
            },
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialsRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = build_clear_cookie(&state.config);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse {
            message: "Logout successful".to_string(),
        }),
    ))
}

// ============================================================================
// Auth Check
// ============================================================================

/// GET /api/auth/check
pub async fn check_auth<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialsRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session_info = if let Some(token) = token {
        use_case.execute(&token).await.ok()
    } else {
        None
    };

    let response = match session_info {
        Some(info) => (
            StatusCode::OK,
            Json(AuthCheckResponse {
                authenticated: true,
                user: Some(UserSummary {
                    id: info.public_id,
                    username: info.user_name,
                    is_admin: info.is_admin,
                }),
                message: None,
            }),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(AuthCheckResponse {
                authenticated: false,
                user: None,
                message: Some("Not authenticated".to_string()),
            }),
        ),
    };

    Ok(response)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl_secs()),
    }
}

fn build_session_cookie(config: &AuthConfig, token: &str) -> String {
    session_cookie_config(config).build_set_cookie(token)
}

fn build_clear_cookie(config: &AuthConfig) -> String {
    session_cookie_config(config).build_delete_cookie()
}
