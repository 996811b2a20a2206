use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        story::{StoryCreateDto, StoryDetailDto, StorySummaryDto, StoryUpdateDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::story::{CreateStoryParam, StoryOverview, UpdateStoryParam},
    service::story::StoryService,
    state::AppState,
};

/// Tag for grouping story endpoints in OpenAPI documentation
pub static STORY_TAG: &str = "story";

/// Get all stories.
///
/// Returns every story newest first, with owner, tags, and part/like/comment
/// counts. Private stories are included in the listing; their content is
/// still guarded by the detail endpoint.
///
/// # Returns
/// - `200 OK`: JSON array of story summaries
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/stories",
    tag = STORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved stories", body = Vec<StorySummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stories = StoryService::new(&state.db).list().await?;
    let stories: Vec<StorySummaryDto> =
        stories.into_iter().map(StoryOverview::into_dto).collect();

    Ok((StatusCode::OK, Json(stories)))
}

/// Get a single story with its parts.
///
/// Private stories are only visible to their owner: anonymous callers get
/// 401, other users 403.
///
/// # Returns
/// - `200 OK`: Full story with ordered parts and contributors
/// - `401 Unauthorized`: Private story, no credentials
/// - `403 Forbidden`: Private story, caller is not the owner
/// - `404 Not Found`: No story with that id
#[utoipa::path(
    get,
    path = "/api/stories/{id}",
    tag = STORY_TAG,
    params(
        ("id" = i32, Path, description = "Story id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved story", body = StoryDetailDto),
        (status = 401, description = "Authentication required for private stories", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_story(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state, &headers).optional().await?;

    let detail = StoryService::new(&state.db)
        .get(story_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Create a story.
///
/// Tag names are normalized server-side; a non-blank `initial_content`
/// becomes the first part. Bumps the owner's started-stories counter.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created`: The created story summary
/// - `400 Bad Request`: Blank title
/// - `401 Unauthorized`: Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/stories",
    tag = STORY_TAG,
    request_body = StoryCreateDto,
    responses(
        (status = 201, description = "Successfully created story", body = StorySummaryDto),
        (status = 400, description = "Invalid story data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_story(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StoryCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let overview = StoryService::new(&state.db)
        .create(CreateStoryParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(overview.into_dto())))
}

/// Update a story.
///
/// Partial update; a present `tags` list replaces the story's tag set.
///
/// # Access Control
/// - Requires a valid bearer token; owner only
///
/// # Returns
/// - `200 OK`: The updated story summary
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Caller is not the owner
/// - `404 Not Found`: No story with that id
#[utoipa::path(
    put,
    path = "/api/stories/{id}",
    tag = STORY_TAG,
    params(
        ("id" = i32, Path, description = "Story id")
    ),
    request_body = StoryUpdateDto,
    responses(
        (status = 200, description = "Successfully updated story", body = StorySummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_story(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<StoryUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let overview = StoryService::new(&state.db)
        .update(UpdateStoryParam::from_dto(story_id, user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// Delete a story with all its dependent rows.
///
/// Parts, tag links, likes, comments, and reports go in the same
/// transaction as the story itself.
///
/// # Access Control
/// - Requires a valid bearer token; owner only
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Caller is not the owner
/// - `404 Not Found`: No story with that id
#[utoipa::path(
    delete,
    path = "/api/stories/{id}",
    tag = STORY_TAG,
    params(
        ("id" = i32, Path, description = "Story id")
    ),
    responses(
        (status = 200, description = "Story deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_story(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    StoryService::new(&state.db).delete(story_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Story deleted".to_string(),
        }),
    ))
}
