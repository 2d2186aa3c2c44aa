//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::presentation::middleware::SessionContext;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{
    CreatePostRequest, CreatePostResponse, DeletePostResponse, PostResponse, UpdatePostRequest,
    UpdatePostResponse,
};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// List (public)
// ============================================================================

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let posts = use_case.execute().await?;

    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

// ============================================================================
// Get (public)
// ============================================================================

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());

    let post = use_case.execute(&id).await?;

    Ok(Json(PostResponse::from(&post)))
}

// ============================================================================
// Create (guarded)
// ============================================================================

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        author: req.author,
        excerpt: req.excerpt,
        content: req.content,
        image_url: req.image_url,
    };

    let post = use_case.execute(&ctx, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: "Post created successfully".to_string(),
            post: PostResponse::from(&post),
        }),
    ))
}

// ============================================================================
// Update (guarded + ownership)
// ============================================================================

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(id): Path<String>,
    Extension(ctx): Extension<SessionContext>,
    Json(req): Json<UpdatePostRequest>,
) -> PostResult<Json<UpdatePostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let post = use_case.execute(&ctx, &id, req.into()).await?;

    Ok(Json(UpdatePostResponse {
        message: "Post updated successfully".to_string(),
        post: PostResponse::from(&post),
    }))
}

// ============================================================================
// Delete (guarded + ownership)
// ============================================================================

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(id): Path<String>,
    Extension(ctx): Extension<SessionContext>,
) -> PostResult<Json<DeletePostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case.execute(&ctx, &id).await?;

    Ok(Json(DeletePostResponse {
        message: "Post deleted successfully".to_string(),
        post_id: id,
    }))
}
