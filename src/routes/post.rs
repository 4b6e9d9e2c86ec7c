use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::{
    dto::{CreatePostRequest, UpdatePostRequest},
    errors::ApiError,
    models::Post,
    states::AppState,
};

/// POST /posts
/// Body: { "title": "...", "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.service.create(payload)?;

    info!("Post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.service.find_all())
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = state.service.find_by_id(id)?;

    Ok(Json(post))
}

/// PUT /posts/:id
/// Body: { "title": "...", "content": "..." }
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state.service.update(id, payload)?;

    info!("Post updated: {}", post.id);

    Ok(Json(post))
}

/// DELETE /posts/:id
/// Returns 204 whether or not the id existed.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<i64>) -> StatusCode {
    state.service.delete(id);

    info!("Post deleted: {}", id);

    StatusCode::NO_CONTENT
}
