//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::Json;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{public_id::PublicId, user_id::UserId};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Session identity attached to guarded requests
///
/// Explicit context values handed to downstream handlers; there is no
/// ambient request-scoped session object.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: UserId,
    pub public_id: PublicId,
    pub user_name: String,
    pub is_admin: bool,
}

impl From<&Session> for SessionContext {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id,
            public_id: session.public_id,
            user_name: session.user_name.to_string(),
            is_admin: session.is_admin,
        }
    }
}

/// Middleware that requires a valid auth session
///
/// Short-circuits with 401 before any domain logic runs. The response
/// carries a machine-readable re-login flag in both the body and the
/// `X-Auth-Required` header.
pub async fn require_auth_session<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let headers = req.headers();

    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = if let Some(token) = token {
        use_case.get_session(&token).await.ok()
    } else {
        None
    };

    let Some(session) = session else {
        return Err(unauthorized_response());
    };

    // Make the session identity available to downstream handlers
    req.extensions_mut()
        .insert(SessionContext::from(&session));

    Ok(next.run(req).await)
}

fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [("X-Auth-Required", "true")],
        Json(json!({
            "message": "Not authorized. Please login again.",
            "requiresLogin": true,
        })),
    )
        .into_response()
}
