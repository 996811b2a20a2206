use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::story::StorySummaryDto, error::AppError, middleware::auth::AuthGuard,
    model::story::StoryOverview, service::story::StoryService, state::AppState,
};

/// GET /api/users/{id}/stories - A user's own stories
///
/// Private stories are only included when the caller is the user themselves.
pub async fn get_user_stories(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state, &headers).optional().await?;

    let stories = StoryService::new(&state.db)
        .user_stories(user_id, viewer.map(|u| u.id))
        .await?;
    let stories: Vec<StorySummaryDto> =
        stories.into_iter().map(StoryOverview::into_dto).collect();

    Ok((StatusCode::OK, Json(stories)))
}

/// GET /api/users/{id}/contributions - Public stories a user contributed to
pub async fn get_user_contributions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let stories = StoryService::new(&state.db).user_contributions(user_id).await?;
    let stories: Vec<StorySummaryDto> =
        stories.into_iter().map(StoryOverview::into_dto).collect();

    Ok((StatusCode::OK, Json(stories)))
}
