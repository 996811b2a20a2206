use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::story_part::{ReorderPartsDto, StoryPartCreateDto, StoryPartUpdateDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::story_part::{AddPartParam, DeletePartParam, ReorderPartsParam, UpdatePartParam},
    service::story_part::StoryPartService,
    state::AppState,
};

/// POST /api/stories/{id}/parts - Append a part to a story
///
/// The story must be editable. Contributors who are not the owner get their
/// contributed-stories counter bumped.
///
/// # Authentication
/// Requires a valid bearer token.
///
/// # Returns
/// - `201 Created`: The created part with its author
/// - `400 Bad Request`: Story not editable or blank content
/// - `404 Not Found`: No story with that id
pub async fn add_part(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<StoryPartCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let part = StoryPartService::new(&state.db)
        .add(AddPartParam {
            story_id,
            author_id: user.id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(part.into_dto())))
}

/// GET /api/stories/{id}/parts/{part_id} - Get a single part
///
/// Parts of private stories are only visible to the story owner.
pub async fn get_part(
    State(state): State<AppState>,
    Path((story_id, part_id)): Path<(i32, i32)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state, &headers).optional().await?;

    let part = StoryPartService::new(&state.db)
        .get(story_id, part_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(part.into_dto())))
}

/// PUT /api/stories/{id}/parts/{part_id} - Edit a part's content
///
/// # Authentication
/// Requires a valid bearer token; part author or story owner only.
pub async fn update_part(
    State(state): State<AppState>,
    Path((story_id, part_id)): Path<(i32, i32)>,
    headers: HeaderMap,
    Json(payload): Json<StoryPartUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let part = StoryPartService::new(&state.db)
        .update(UpdatePartParam {
            story_id,
            part_id,
            acting_user_id: user.id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::OK, Json(part.into_dto())))
}

/// DELETE /api/stories/{id}/parts/{part_id} - Remove a part
///
/// Later parts shift down so positions stay a dense 1..N.
///
/// # Authentication
/// Requires a valid bearer token; part author or story owner only.
pub async fn delete_part(
    State(state): State<AppState>,
    Path((story_id, part_id)): Path<(i32, i32)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    StoryPartService::new(&state.db)
        .delete(DeletePartParam {
            story_id,
            part_id,
            acting_user_id: user.id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/stories/{id}/parts/order - Reorder a story's parts
///
/// The payload must list exactly the story's part ids in their new order;
/// anything else is rejected without changing positions.
///
/// # Authentication
/// Requires a valid bearer token; owner only.
pub async fn reorder_parts(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<ReorderPartsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    StoryPartService::new(&state.db)
        .reorder(ReorderPartsParam {
            story_id,
            acting_user_id: user.id,
            part_ids: payload.part_ids,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
