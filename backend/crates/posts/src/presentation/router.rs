//! Posts Router
//!
//! Reads are public; mutating routes sit behind the auth crate's session
//! guard, which short-circuits with 401 before any post logic runs.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::SessionRepository;
use auth::infra::postgres::PgAuthRepository;
use auth::presentation::middleware::{AuthMiddlewareState, require_auth_session};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router with PostgreSQL repositories
pub fn posts_router(
    repo: PgPostRepository,
    session_repo: PgAuthRepository,
    auth_config: AuthConfig,
) -> Router {
    posts_router_generic(repo, session_repo, auth_config)
}

/// Create a generic Posts router for any repository implementations
pub fn posts_router_generic<R, S>(repo: R, session_repo: S, auth_config: AuthConfig) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };

    let guard_state = AuthMiddlewareState {
        repo: Arc::new(session_repo),
        config: Arc::new(auth_config),
    };

    let guard = axum::middleware::from_fn(move |req, next| {
        require_auth_session(guard_state.clone(), req, next)
    });

    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<R>)
                .merge(post(handlers::create_post::<R>).route_layer(guard.clone())),
        )
        .route(
            "/{id}",
            get(handlers::get_post::<R>).merge(
                put(handlers::update_post::<R>)
                    .delete(handlers::delete_post::<R>)
                    .route_layer(guard),
            ),
        )
        .with_state(state)
}
