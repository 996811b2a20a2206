use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::search::SearchQueryDto, error::AppError, middleware::auth::AuthGuard,
    model::story::SearchParam, service::story::StoryService, state::AppState,
};

/// GET /api/search - Search stories
///
/// Free-text match against title, description, and part content, with an
/// optional comma-separated tag filter. Anonymous callers only see public
/// stories; authenticated callers also see their own private ones.
///
/// # Query Parameters
/// - `query`: free-text search term
/// - `tags`: comma-separated tag names
/// - `page`: one-based page number (default 1)
/// - `page_size`: results per page, 1..=50 (default 10)
pub async fn search_stories(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryDto>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state, &headers).optional().await?;

    let results = StoryService::new(&state.db)
        .search(SearchParam::from_dto(params, viewer.map(|u| u.id)))
        .await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
