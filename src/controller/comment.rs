use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::comment::{CommentCreateDto, CommentDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::comment::{AddCommentParam, Comment},
    service::comment::CommentService,
    state::AppState,
};

/// POST /api/stories/{id}/comments - Comment on a story
///
/// # Authentication
/// Requires a valid bearer token.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<CommentCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let comment = CommentService::new(&state.db)
        .add(AddCommentParam {
            story_id,
            user_id: user.id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// GET /api/stories/{id}/comments - List a story's comments, newest first
pub async fn get_comments(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).list(story_id).await?;
    let comments: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// GET /api/stories/{id}/comments/{comment_id} - Get a single comment
pub async fn get_comment(
    State(state): State<AppState>,
    Path((story_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db).get(story_id, comment_id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// DELETE /api/stories/{id}/comments/{comment_id} - Remove a comment
///
/// # Authentication
/// Requires a valid bearer token; comment author or story owner only.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((story_id, comment_id)): Path<(i32, i32)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    CommentService::new(&state.db)
        .delete(story_id, comment_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
