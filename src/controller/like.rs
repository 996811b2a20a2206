use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::like::LikeStatusDto, error::AppError, middleware::auth::AuthGuard,
    service::like::LikeService, state::AppState,
};

/// POST /api/stories/{id}/likes - Toggle the caller's like on a story
///
/// # Authentication
/// Requires a valid bearer token.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let liked = LikeService::new(&state.db).toggle(story_id, user.id).await?;

    Ok((StatusCode::OK, Json(LikeStatusDto { liked })))
}

/// GET /api/stories/{id}/likes/status - Whether the caller likes a story
///
/// # Authentication
/// Requires a valid bearer token.
pub async fn get_like_status(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let liked = LikeService::new(&state.db).status(story_id, user.id).await?;

    Ok((StatusCode::OK, Json(LikeStatusDto { liked })))
}
